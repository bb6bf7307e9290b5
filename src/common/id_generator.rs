// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Saved rows get human-readable, prefixed IDs: PREFIX_XXXXXX (e.g. B_K7NP3X).
//! The alphabet excludes I, L, O and U.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const DEFAULT_ID_LENGTH: usize = 6;

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// Saved blueprint (B_)
    Blueprint,
}

impl EntityPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Blueprint => "B",
        }
    }
}

fn generate_crockford_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| CROCKFORD_ALPHABET[rng.gen_range(0..32)] as char)
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
pub fn generate_id(prefix: EntityPrefix) -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}_{}",
        prefix.as_str(),
        generate_crockford_string(&mut rng, DEFAULT_ID_LENGTH)
    )
}

/// Generate a saved blueprint ID (B_XXXXXX)
pub fn generate_blueprint_id() -> String {
    generate_id(EntityPrefix::Blueprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_generate_blueprint_id_format() {
        let id = generate_blueprint_id();
        assert!(id.starts_with("B_"));
        assert_eq!(id.len(), 2 + DEFAULT_ID_LENGTH);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let raw = generate_crockford_string(&mut rng, 500);
        for c in raw.chars() {
            assert!(CROCKFORD_ALPHABET.contains(&(c as u8)), "unexpected {}", c);
            assert!(!matches!(c, 'I' | 'L' | 'O' | 'U'));
        }
    }

    #[test]
    fn test_uniqueness() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_blueprint_id()).collect();
        assert!(ids.len() > 990);
    }
}
