//! Free-text cleanup applied before enumeration matching.

use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeOptions {
    pub to_lower_case: bool,
    pub collapse_spaces: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            to_lower_case: false,
            collapse_spaces: true,
        }
    }
}

/// Trims, NFC-normalizes, strips C0 controls and DEL, then optionally
/// collapses whitespace runs and lowercases.
pub fn sanitize_string(value: &str, options: SanitizeOptions) -> String {
    let normalized: String = value.trim().nfc().filter(|c| !is_stripped_control(*c)).collect();

    let collapsed = if options.collapse_spaces {
        collapse_whitespace(&normalized)
    } else {
        normalized
    };

    if options.to_lower_case {
        collapsed.to_lowercase()
    } else {
        collapsed
    }
}

fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}')
}

fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
