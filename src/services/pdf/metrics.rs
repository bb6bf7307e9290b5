// src/services/pdf/metrics.rs
//! Glyph widths for the two base-14 fonts used in exports.
//!
//! Widths come from the Adobe Helvetica and Helvetica-Bold AFM files, in
//! 1/1000 em, for ASCII 0x20..=0x7E. Index = (char as usize) - 32.

use super::layout::FontStyle;

/// Points to millimetres
pub const PT_TO_MM: f32 = 25.4 / 72.0;

const FALLBACK_WIDTH: u16 = 556;
const BULLET_WIDTH: u16 = 350;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn glyph_width(c: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Regular => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - 32],
        '\u{2022}' => BULLET_WIDTH,
        _ => FALLBACK_WIDTH,
    }
}

/// Rendered width of `text` in millimetres
pub fn text_width_mm(text: &str, style: FontStyle, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, style))).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

/// Greedy word wrap against measured widths.
///
/// Words wider than the line are broken between characters. Always returns
/// at least one line so callers can reserve space for empty strings.
pub fn wrap_text(text: &str, style: FontStyle, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let fits = |s: &str| text_width_mm(s, style, size_pt) <= max_width_mm;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
        } else {
            for c in word.chars() {
                current.push(c);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shorten `text` with a trailing "..." until it fits
pub fn ellipsize(text: &str, style: FontStyle, size_pt: f32, max_width_mm: f32) -> String {
    if text_width_mm(text, style, size_pt) <= max_width_mm {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = format!("{}...", chars.iter().collect::<String>().trim_end());
        if text_width_mm(&candidate, style, size_pt) <= max_width_mm {
            return candidate;
        }
    }
    "...".to_string()
}
