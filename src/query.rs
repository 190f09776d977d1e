// src/query.rs
// Turns one line of user input into the token sequence the matcher works on.

/// Lowercases the line, strips trailing question marks and splits on whitespace.
pub fn tokenize(line: &str) -> Vec<String> {
    line.to_lowercase()
        .trim_end_matches(|c: char| c == '?' || c.is_whitespace())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_question_mark_and_lowercases() {
        assert_eq!(
            tokenize("when was Marie Curie born?"),
            vec!["when", "was", "marie", "curie", "born"]
        );
    }

    #[test]
    fn detached_and_repeated_question_marks() {
        assert_eq!(tokenize("  bye ??  \n"), vec!["bye"]);
        assert_eq!(tokenize("bye?\t?"), vec!["bye"]);
        assert_eq!(
            tokenize("when was marie curie born? ?"),
            vec!["when", "was", "marie", "curie", "born"]
        );
    }

    #[test]
    fn inner_question_marks_survive() {
        assert_eq!(tokenize("what? now"), vec!["what?", "now"]);
    }

    #[test]
    fn blank_line_is_empty_query() {
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("?").is_empty());
    }
}
