//! Text normalization
//!
//! Cleans raw review text before scoring: lowercases, strips characters
//! that are neither alphanumeric nor apostrophes (so contractions survive
//! for lexicon lookup), collapses whitespace runs to single spaces, and
//! trims. Pure and infallible; an empty input yields an empty output.

/// Clean a raw review for scoring
///
/// # Example
/// ```
/// use resena::normalize::clean_text;
///
/// assert_eq!(clean_text("Wow... Loved this place."), "wow loved this place");
/// assert_eq!(clean_text("  Crust  is not\tgood. "), "crust is not good");
/// assert_eq!(clean_text(""), "");
/// ```
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            for lowered in ch.to_lowercase() {
                out.push(lowered);
            }
            prev_space = false;
        } else if !prev_space && !out.is_empty() {
            // Whitespace and punctuation both collapse to one separator
            out.push(' ');
            prev_space = true;
        }
    }

    if prev_space {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(clean_text("HELLO World"), "hello world");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(clean_text("good, really good!"), "good really good");
        assert_eq!(clean_text("5/10 -- meh..."), "5 10 meh");
    }

    #[test]
    fn test_keeps_apostrophes() {
        assert_eq!(clean_text("Wouldn't go back."), "wouldn't go back");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("a  b\t\tc\nd"), "a b c d");
    }

    #[test]
    fn test_trims() {
        assert_eq!(clean_text("   padded   "), "padded");
        assert_eq!(clean_text("...!!!"), "");
    }

    #[test]
    fn test_empty_in_empty_out() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_unicode_lowercase() {
        assert_eq!(clean_text("CAFÉ Brûlée"), "café brûlée");
    }

    #[test]
    fn test_idempotent() {
        let once = clean_text("Wow... Loved this place.");
        assert_eq!(clean_text(&once), once);
    }
}
