// Helper functions for safe logging, file naming, skill lists and JSON columns

use serde::de::DeserializeOwned;

/// Masks email addresses for safe logging
///
/// # Example
/// ```ignore
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            format!("{}***@{}", &parts[0][..1.min(parts[0].len())], parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Lower-cases a title and replaces every non-alphanumeric character with `_`
///
/// Each offending character is replaced individually, so runs are not collapsed.
pub fn slugify_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// Download file name for an exported blueprint
pub fn blueprint_file_name(title: &str) -> String {
    format!("{}_blueprint.pdf", slugify_title(title))
}

/// Trims entries, drops blanks and keeps the first spelling of
/// case-insensitive duplicates
pub fn normalize_skill_list(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect()
}

/// Directory name for a user id; anything but `[A-Za-z0-9_-]` becomes `_`
pub fn storage_dir_name(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Current UTC time as fixed-width RFC 3339, so stored values sort as text
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

/// Decodes a JSON text column, falling back to the type's default on bad data
pub fn decode_json_column<T: DeserializeOwned + Default>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Malformed JSON column, using default");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_email_log() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
        assert_eq!(safe_email_log("bad"), "***@***.***");
        assert_eq!(safe_email_log("no-at-sign"), "***@***.***");
    }

    #[test]
    fn test_slugify_title_replaces_each_character() {
        assert_eq!(
            slugify_title("Build a Distributed Real-Time Stock Ticker System"),
            "build_a_distributed_real_time_stock_ticker_system"
        );
        assert_eq!(slugify_title("C++ & Rust!"), "c_____rust_");
        assert_eq!(slugify_title("Café"), "caf_");
        assert_eq!(slugify_title("\u{1f3af} ETL v2"), "__etl_v2");
    }

    #[test]
    fn test_blueprint_file_name() {
        assert_eq!(
            blueprint_file_name("Build an ETL Pipeline"),
            "build_an_etl_pipeline_blueprint.pdf"
        );
    }

    #[test]
    fn test_normalize_skill_list() {
        let skills = vec![
            " Rust ".to_string(),
            "".to_string(),
            "rust".to_string(),
            "SQL".to_string(),
            "   ".to_string(),
            "sql".to_string(),
            "Docker".to_string(),
        ];
        assert_eq!(normalize_skill_list(skills), vec!["Rust", "SQL", "Docker"]);
    }

    #[test]
    fn test_storage_dir_name() {
        assert_eq!(storage_dir_name("00000000-0000-0000-0000-000000000001"), "00000000-0000-0000-0000-000000000001");
        assert_eq!(storage_dir_name("../etc/passwd"), "___etc_passwd");
    }

    #[test]
    fn test_decode_json_column_falls_back() {
        let skills: Vec<String> = decode_json_column(r#"["Rust","SQL"]"#);
        assert_eq!(skills, vec!["Rust", "SQL"]);

        let broken: Vec<String> = decode_json_column("not json");
        assert!(broken.is_empty());
    }

    #[test]
    fn test_now_timestamp_is_fixed_width() {
        let stamp = now_timestamp();
        assert_eq!(stamp.len(), "2026-01-01T00:00:00.000000Z".len());
        assert!(stamp.ends_with('Z'));
    }
}
