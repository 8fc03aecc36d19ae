//! Word classification for curl commands.

/// A classified word from a sliced command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The leading `curl` word.
    CommandBegin,
    /// A word starting with a single dash, such as `-H`.
    ShortFlag(String),
    /// A word starting with two dashes, carrying its value inline, such
    /// as `--header=Accept:application/json`.
    LongFlag(String),
    /// Any other word.
    Word(String),
}

/// Classify sliced words into tokens.
///
/// Only the first word can become [`Token::CommandBegin`]; a `curl`
/// appearing later is an ordinary word.
pub fn tokenize(words: &[String]) -> Vec<Token> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 && word == "curl" {
                Token::CommandBegin
            } else if word.starts_with("--") {
                Token::LongFlag(word.clone())
            } else if word.starts_with('-') {
                Token::ShortFlag(word.clone())
            } else {
                Token::Word(word.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::slicer::slice;

    #[test]
    fn test_classifies_words() {
        let tokens = tokenize(&slice("curl -X POST --header=Accept:application/json https://example.com"));
        assert_eq!(
            tokens,
            vec![
                Token::CommandBegin,
                Token::ShortFlag("-X".to_string()),
                Token::Word("POST".to_string()),
                Token::LongFlag("--header=Accept:application/json".to_string()),
                Token::Word("https://example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_curl_is_special_only_at_the_front() {
        let tokens = tokenize(&slice("curl curl"));
        assert_eq!(
            tokens,
            vec![Token::CommandBegin, Token::Word("curl".to_string())]
        );
    }

    #[test]
    fn test_non_curl_first_word() {
        let tokens = tokenize(&slice("wget https://example.com"));
        assert_eq!(
            tokens,
            vec![
                Token::Word("wget".to_string()),
                Token::Word("https://example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_words() {
        assert!(tokenize(&[]).is_empty());
    }
}
