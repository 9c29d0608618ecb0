//! Devanagari script detection

/// Returns true if any character of `text` falls in the Devanagari
/// Unicode block (U+0900..=U+097F).
///
/// Characters outside that block never trigger a match, regardless of
/// visual similarity.
#[must_use]
pub fn contains_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hindi_text() {
        assert!(contains_devanagari("नमस्ते"));
        assert!(contains_devanagari("आप कैसे हैं"));
    }

    #[test]
    fn rejects_latin_text() {
        assert!(!contains_devanagari("hello"));
        assert!(!contains_devanagari("hello world 123"));
        assert!(!contains_devanagari(""));
    }

    #[test]
    fn detects_mixed_text() {
        assert!(contains_devanagari("hello नमस्ते"));
    }

    #[test]
    fn block_boundaries() {
        // First and last code points of the block
        assert!(contains_devanagari("\u{0900}"));
        assert!(contains_devanagari("\u{097F}"));
        // Immediate neighbors outside the block
        assert!(!contains_devanagari("\u{08FF}"));
        assert!(!contains_devanagari("\u{0980}"));
    }

    #[test]
    fn other_scripts_do_not_match() {
        // Bengali and Tamil share no code points with Devanagari
        assert!(!contains_devanagari("বাংলা"));
        assert!(!contains_devanagari("தமிழ்"));
    }
}
