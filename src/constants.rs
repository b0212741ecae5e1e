//! Site-wide constants shared by the server and rendering layers

/// Spectators are listed by name only up to this count; beyond it only the
/// total is shown.
pub const MAX_NAMED_SPECTATORS: usize = 20;

/// UI locales with a translation catalog
pub const LANGUAGES: &[&str] = &[
    "de", "en", "es", "gl_ES", "fr", "hu", "it", "ja", "ko", "pt", "th", "tr", "zh",
];

/// Capablanca start position used as the conservative default setup
pub const CONSERVATIVE_CAPA_FEN: &str =
    "arnbqkbnrc/pppppppppp/10/10/10/10/PPPPPPPPPP/ARNBQKBNRC w KQkq - 0 1";

pub fn is_supported_language(code: &str) -> bool {
    LANGUAGES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        assert_eq!(LANGUAGES.len(), 13);
        assert!(is_supported_language("gl_ES"));
        assert!(is_supported_language("zh"));
        assert!(!is_supported_language("gl"));
        assert!(!is_supported_language("EN"));
    }

    #[test]
    fn test_capa_fen_has_ten_files() {
        let board = CONSERVATIVE_CAPA_FEN.split(' ').next().unwrap();
        assert_eq!(board.split('/').count(), 8);
        assert!(board.split('/').all(|rank| rank.len() == 10 || rank == "10"));
    }
}
