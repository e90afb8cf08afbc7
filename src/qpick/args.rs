use super::entry::{Entry, DEFAULT_WEIGHT};
use log::trace;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("missing flag after '-'")]
    MissingFlag,
    #[error("expected a number after '-q', got {0}")]
    NotANumber(String),
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("no number after last '-q'")]
    DanglingWeight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedArgs {
    /// `-h` or `--help` was seen. Anything after it was ignored.
    Help,
    /// The names in command-line order. May be empty.
    Entries(Vec<Entry>),
}

///
/// What a single token is, before the parser state is taken into account.
///
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Name,
    /// `-q` on its own, the weight is the next token
    BareWeight,
    /// `-q1.5`, carrying the text after the `q`
    InlineWeight(&'a str),
    Help,
    /// A bare `-` or `--`
    EmptyFlag,
    UnknownFlag,
}

fn classify(token: &str) -> Token<'_> {
    if !token.starts_with('-') {
        return Token::Name;
    }
    let body = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    match body {
        "" => Token::EmptyFlag,
        "h" | "help" => Token::Help,
        "q" => Token::BareWeight,
        _ => match body.strip_prefix('q') {
            Some(suffix) => Token::InlineWeight(suffix),
            None => Token::UnknownFlag,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// The next name gets `weight`
    AwaitingName { weight: f64 },
    /// A bare `-q` was seen; the next token must be a number
    AwaitingWeight,
}

fn parse_weight(text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map_err(|_| ParseError::NotANumber(text.to_string()))
}

///
/// Turns the command-line tokens (without the program name) into entries.
///
/// A weight only ever applies to the name straight after it. Weights are not
/// checked for sign here; that is left to the selector.
///
pub fn parse_args<I, S>(tokens: I) -> Result<ParsedArgs, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    let mut state = State::AwaitingName {
        weight: DEFAULT_WEIGHT,
    };

    for token in tokens {
        let token = token.as_ref();
        trace!("Token {:?} in state {:?}", token, state);
        state = match state {
            State::AwaitingWeight => State::AwaitingName {
                weight: parse_weight(token)?,
            },
            State::AwaitingName { weight } => match classify(token) {
                Token::Help => return Ok(ParsedArgs::Help),
                Token::EmptyFlag => return Err(ParseError::MissingFlag),
                Token::UnknownFlag => return Err(ParseError::UnknownFlag(token.to_string())),
                Token::BareWeight => State::AwaitingWeight,
                Token::InlineWeight(suffix) => State::AwaitingName {
                    weight: parse_weight(suffix)?,
                },
                Token::Name => {
                    entries.push(Entry::new(token, weight));
                    State::AwaitingName {
                        weight: DEFAULT_WEIGHT,
                    }
                }
            },
        };
    }

    if matches!(state, State::AwaitingWeight) {
        return Err(ParseError::DanglingWeight);
    }
    log::debug!("Parsed {} entries", entries.len());
    Ok(ParsedArgs::Entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(tokens: &[&str]) -> Vec<Entry> {
        match parse_args(tokens) {
            Ok(ParsedArgs::Entries(entries)) => entries,
            other => panic!("Expected entries for {:?}, got {:?}", tokens, other),
        }
    }

    #[test]
    fn test_classify() {
        let test_cases = vec![
            ("cat", Token::Name),
            ("-", Token::EmptyFlag),
            ("--", Token::EmptyFlag),
            ("-h", Token::Help),
            ("--help", Token::Help),
            ("-help", Token::Help),
            ("-q", Token::BareWeight),
            ("--q", Token::BareWeight),
            ("-q1.2", Token::InlineWeight("1.2")),
            ("--qx", Token::InlineWeight("x")),
            ("-x", Token::UnknownFlag),
            ("---q", Token::UnknownFlag),
        ];
        for (token, expected) in test_cases {
            assert_eq!(classify(token), expected, "Token {:?}", token);
        }
    }

    #[test]
    fn test_names_get_default_weight() {
        assert_eq!(
            entries(&["apple", "banana", "pear"]),
            vec![
                Entry::new("apple", 1.0),
                Entry::new("banana", 1.0),
                Entry::new("pear", 1.0),
            ]
        );
    }

    #[test]
    fn test_weight_applies_to_following_name() {
        assert_eq!(
            entries(&["a", "-q", "2", "b"]),
            vec![Entry::new("a", 1.0), Entry::new("b", 2.0)]
        );
    }

    #[test]
    fn test_inline_weight() {
        assert_eq!(entries(&["-q0.1", "cat"]), vec![Entry::new("cat", 0.1)]);
        assert_eq!(entries(&["--q3", "cat"]), vec![Entry::new("cat", 3.0)]);
    }

    #[test]
    fn test_weight_resets_after_name() {
        assert_eq!(
            entries(&["-q5", "a", "b"]),
            vec![Entry::new("a", 5.0), Entry::new("b", 1.0)]
        );
    }

    #[test]
    fn test_later_weight_replaces_earlier() {
        assert_eq!(entries(&["-q2", "-q", "3", "a"]), vec![Entry::new("a", 3.0)]);
    }

    #[test]
    fn test_mixed_example() {
        assert_eq!(
            entries(&["dog", "-q", "1.2", "cat", "-q0.1", "mouse"]),
            vec![
                Entry::new("dog", 1.0),
                Entry::new("cat", 1.2),
                Entry::new("mouse", 0.1),
            ]
        );
    }

    #[test]
    fn test_repeated_names_are_separate_entries() {
        assert_eq!(
            entries(&["a", "-q2", "a"]),
            vec![Entry::new("a", 1.0), Entry::new("a", 2.0)]
        );
    }

    #[test]
    fn test_bare_weight_takes_flag_like_number() {
        // Sign is not checked here
        assert_eq!(entries(&["-q", "-1", "a"]), vec![Entry::new("a", -1.0)]);
    }

    #[test]
    fn test_empty_input_is_empty_entries() {
        assert!(entries(&[]).is_empty());
        assert!(entries(&["-q", "2"]).is_empty());
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parse_args(["a", "-h", "-badflag"]), Ok(ParsedArgs::Help));
        assert_eq!(parse_args(["--help", "-q"]), Ok(ParsedArgs::Help));
    }

    #[test]
    fn test_help_after_bare_weight_is_not_a_number() {
        assert_eq!(
            parse_args(["-q", "-h"]),
            Err(ParseError::NotANumber("-h".to_string()))
        );
    }

    #[test]
    fn test_errors() {
        let test_cases: Vec<(Vec<&str>, ParseError)> = vec![
            (vec!["a", "-"], ParseError::MissingFlag),
            (vec!["--", "a"], ParseError::MissingFlag),
            (vec!["a", "-q"], ParseError::DanglingWeight),
            (vec!["-q", "many", "a"], ParseError::NotANumber("many".to_string())),
            (vec!["-qx", "a"], ParseError::NotANumber("x".to_string())),
            (vec!["a", "--verbose"], ParseError::UnknownFlag("--verbose".to_string())),
        ];
        for (tokens, expected) in test_cases {
            assert_eq!(parse_args(&tokens), Err(expected), "Tokens {:?}", tokens);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::DanglingWeight.to_string(),
            "no number after last '-q'"
        );
        assert_eq!(
            ParseError::NotANumber("x".to_string()).to_string(),
            "expected a number after '-q', got x"
        );
        assert_eq!(
            ParseError::UnknownFlag("-x".to_string()).to_string(),
            "unknown flag: -x"
        );
        assert_eq!(ParseError::MissingFlag.to_string(), "missing flag after '-'");
    }
}
