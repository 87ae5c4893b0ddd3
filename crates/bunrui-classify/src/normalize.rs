//! OCR text normalization.
//!
//! Canonicalizes raw OCR output before any matching: whitespace
//! collapsing, case folding, fullwidth→halfwidth mapping, and dash
//! unification. Every other module in this crate assumes its input
//! went through here.

/// Offset between fullwidth forms (U+FF10..U+FF5A) and their ASCII
/// equivalents.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Dash-like characters unified to an ASCII hyphen. Includes the
/// katakana prolonged sound mark, which OCR engines routinely read as
/// a dash in model numbers (and vice versa).
const DASH_CHARS: &[char] = &[
    '-', '－', '﹣', '−', '‐', '⁃', '‑', '‒', '–', '—', '﹘', '―', '⎯', '⏤', 'ー', 'ｰ', '─', '━',
];

/// Normalize raw OCR text. Total and idempotent: applying it twice
/// yields the same string, and it never fails — there is no input it
/// cannot process.
///
/// The transformation order is fixed: whitespace collapsing first,
/// then case folding and width mapping per character, dash unification
/// last.
pub fn normalize(text: &str) -> String {
    // Runs of any Unicode whitespace (including U+3000) become one
    // ASCII space; leading and trailing whitespace is dropped.
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::with_capacity(collapsed.len());
    for c in collapsed.chars() {
        for lowered in c.to_lowercase() {
            out.push(fold_char(lowered));
        }
    }
    out
}

/// Map one (already lowercased) character: fullwidth digits and Latin
/// letters to halfwidth, then any dash variant to `-`.
fn fold_char(c: char) -> char {
    let folded = match c {
        '０'..='９' | 'ａ'..='ｚ' | 'Ａ'..='Ｚ' => {
            char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    };
    if DASH_CHARS.contains(&folded) {
        '-'
    } else {
        folded
    }
}
