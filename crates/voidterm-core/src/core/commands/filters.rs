//! Line filters over file content.

/// Lines of `content` containing `pattern` (case-sensitive substring match).
pub fn grep_lines(pattern: &str, content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter(|line| line.contains(pattern))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDEAS: &str = "AI-powered toaster\nBlockchain for pets\nQuantum-entangled socks";

    #[test]
    fn test_grep_single_match() {
        assert_eq!(grep_lines("pets", IDEAS), vec!["Blockchain for pets"]);
    }

    #[test]
    fn test_grep_multiple_matches_in_order() {
        assert_eq!(
            grep_lines("o", IDEAS),
            vec![
                "AI-powered toaster",
                "Blockchain for pets",
                "Quantum-entangled socks"
            ]
        );
    }

    #[test]
    fn test_grep_case_sensitive() {
        assert!(grep_lines("ai-powered", IDEAS).is_empty());
        assert_eq!(grep_lines("AI", IDEAS), vec!["AI-powered toaster"]);
    }

    #[test]
    fn test_grep_empty_content() {
        assert!(grep_lines("x", "").is_empty());
    }
}
