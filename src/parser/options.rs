//! Flag grammar for curl commands.
//!
//! Pairs flags with their arguments and validates them, turning the
//! token stream into an ordered list of semantic options.

use super::tokens::Token;
use crate::errors::{ParseError, ParseResult};

/// A validated option recovered from the token stream, in command order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurlOption {
    /// A bare word, treated as the request URL.
    Url(String),
    /// `-d` / `--data`: a raw request body.
    Data(String),
    /// `-F` / `--form` / `--form-string`: one form field.
    Form(String, String),
    /// `-H` / `--header`: one header.
    Header(String, String),
    /// `-e` / `--referer`.
    Referer(String),
    /// `-A` / `--user-agent`.
    UserAgent(String),
    /// `-u` / `--user`: basic-auth credentials, password optional.
    BasicAuth(String, Option<String>),
    /// `-X` / `--request`: an explicit HTTP method.
    Method(String),
}

/// Resolve tokens into options.
///
/// The stream must open with the `curl` word and contain at least one
/// more token. Short flags consume the following word as their argument;
/// long flags carry their value inline after `=`.
pub fn resolve(tokens: &[Token]) -> ParseResult<Vec<CurlOption>> {
    match tokens.first() {
        Some(Token::CommandBegin) => {}
        _ => return Err(ParseError::InvalidBegin),
    }
    if tokens.len() < 2 {
        return Err(ParseError::NoUrl);
    }

    let mut options = Vec::new();
    let mut iter = tokens[1..].iter();

    while let Some(token) = iter.next() {
        match token {
            Token::ShortFlag(flag) => {
                let argument = match iter.next() {
                    Some(Token::Word(argument)) => argument,
                    _ => return Err(ParseError::InvalidParameter(flag.clone())),
                };
                options.push(short_option(flag, argument)?);
            }
            Token::LongFlag(raw) => options.push(long_option(raw)?),
            Token::Word(word) => options.push(CurlOption::Url(word.clone())),
            Token::CommandBegin => {}
        }
    }

    Ok(options)
}

fn short_option(flag: &str, argument: &str) -> ParseResult<CurlOption> {
    let option = match flag {
        "-d" => CurlOption::Data(argument.to_string()),
        "-F" => form_option(flag, argument)?,
        "-H" => header_option(flag, argument)?,
        "-e" => CurlOption::Referer(argument.to_string()),
        "-A" => CurlOption::UserAgent(argument.to_string()),
        "-X" => CurlOption::Method(argument.to_string()),
        "-u" => credentials_option(argument),
        _ => return Err(ParseError::NoSuchOption(flag.to_string())),
    };
    Ok(option)
}

fn long_option(raw: &str) -> ParseResult<CurlOption> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (raw, None),
    };
    let option = match name {
        "--data" => CurlOption::Data(required(name, value)?.to_string()),
        "--form" | "--form-string" => form_option(name, required(name, value)?)?,
        "--header" => header_option(name, required(name, value)?)?,
        "--referer" => CurlOption::Referer(required(name, value)?.to_string()),
        "--user-agent" => CurlOption::UserAgent(required(name, value)?.to_string()),
        "--request" => CurlOption::Method(required(name, value)?.to_string()),
        "--user" => credentials_option(required(name, value)?),
        _ => return Err(ParseError::NoSuchOption(name.to_string())),
    };
    Ok(option)
}

/// The inline value a recognized long flag must carry after `=`.
fn required<'a>(name: &str, value: Option<&'a str>) -> ParseResult<&'a str> {
    value.ok_or_else(|| ParseError::InvalidParameter(name.to_string()))
}

/// `key=value`, split on the first `=`. The value keeps any later `=`
/// signs and is never trimmed.
fn form_option(flag: &str, argument: &str) -> ParseResult<CurlOption> {
    let (key, value) = argument
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidParameter(flag.to_string()))?;
    Ok(CurlOption::Form(key.to_string(), value.to_string()))
}

/// `Name: value`, split on the first `:`. Both sides are trimmed so the
/// conventional space after the colon does not leak into the header.
fn header_option(flag: &str, argument: &str) -> ParseResult<CurlOption> {
    let (key, value) = argument
        .split_once(':')
        .ok_or_else(|| ParseError::InvalidParameter(flag.to_string()))?;
    Ok(CurlOption::Header(key.trim().to_string(), value.trim().to_string()))
}

/// `user[:password]`, split on the first `:`.
fn credentials_option(argument: &str) -> CurlOption {
    match argument.split_once(':') {
        Some((user, password)) => {
            CurlOption::BasicAuth(user.to_string(), Some(password.to_string()))
        }
        None => CurlOption::BasicAuth(argument.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::slicer::slice;
    use crate::parser::tokens::tokenize;

    fn options_for(command: &str) -> ParseResult<Vec<CurlOption>> {
        resolve(&tokenize(&slice(command)))
    }

    #[test]
    fn test_long_flags_with_inline_values() {
        let options = options_for(
            "curl --form=message=\" I like it \" -X POST --header=\"Accept: application/json\" https://httpbin.org/post",
        )
        .unwrap();
        assert_eq!(
            options,
            vec![
                CurlOption::Form("message".to_string(), " I like it ".to_string()),
                CurlOption::Method("POST".to_string()),
                CurlOption::Header("Accept".to_string(), "application/json".to_string()),
                CurlOption::Url("https://httpbin.org/post".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_flags_consume_the_next_word() {
        let options = options_for(
            "curl -e \"https://kkbox.com\" -X GET -A Mozilla/5.0 \"https://httpbin.org/get\"",
        )
        .unwrap();
        assert_eq!(
            options,
            vec![
                CurlOption::Referer("https://kkbox.com".to_string()),
                CurlOption::Method("GET".to_string()),
                CurlOption::UserAgent("Mozilla/5.0".to_string()),
                CurlOption::Url("https://httpbin.org/get".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejects_commands_not_starting_with_curl() {
        assert_eq!(options_for("").unwrap_err(), ParseError::InvalidBegin);
        assert_eq!(
            options_for("wget https://example.com").unwrap_err(),
            ParseError::InvalidBegin
        );
    }

    #[test]
    fn test_rejects_bare_curl() {
        assert_eq!(options_for("curl").unwrap_err(), ParseError::NoUrl);
        assert_eq!(options_for("  curl  ").unwrap_err(), ParseError::NoUrl);
    }

    #[test]
    fn test_short_flag_needs_a_word_argument() {
        assert_eq!(
            options_for("curl -F").unwrap_err(),
            ParseError::InvalidParameter("-F".to_string())
        );
        assert_eq!(
            options_for("curl -F -F").unwrap_err(),
            ParseError::InvalidParameter("-F".to_string())
        );
        assert_eq!(
            options_for("curl https://example.com -d").unwrap_err(),
            ParseError::InvalidParameter("-d".to_string())
        );
    }

    #[test]
    fn test_form_argument_needs_an_equals_sign() {
        assert_eq!(
            options_for("curl -F message https://example.com").unwrap_err(),
            ParseError::InvalidParameter("-F".to_string())
        );
    }

    #[test]
    fn test_header_argument_needs_a_colon() {
        assert_eq!(
            options_for("curl -H Accept https://example.com").unwrap_err(),
            ParseError::InvalidParameter("-H".to_string())
        );
    }

    #[test]
    fn test_long_flag_without_inline_value() {
        assert_eq!(
            options_for("curl --form --form").unwrap_err(),
            ParseError::InvalidParameter("--form".to_string())
        );
        assert_eq!(
            options_for("curl --header https://example.com").unwrap_err(),
            ParseError::InvalidParameter("--header".to_string())
        );
    }

    #[test]
    fn test_unknown_flags_report_the_name() {
        assert_eq!(
            options_for("curl -Z x https://example.com").unwrap_err(),
            ParseError::NoSuchOption("-Z".to_string())
        );
        assert_eq!(
            options_for("curl --nope=value https://example.com").unwrap_err(),
            ParseError::NoSuchOption("--nope".to_string())
        );
    }

    #[test]
    fn test_form_value_keeps_later_equals_signs() {
        let options = options_for("curl -F token=a=b=c https://example.com").unwrap();
        assert_eq!(
            options[0],
            CurlOption::Form("token".to_string(), "a=b=c".to_string())
        );
    }

    #[test]
    fn test_header_value_keeps_later_colons() {
        let options = options_for("curl -H \"X-Time: 12:30\" https://example.com").unwrap();
        assert_eq!(
            options[0],
            CurlOption::Header("X-Time".to_string(), "12:30".to_string())
        );
    }

    #[test]
    fn test_form_string_alias() {
        let options = options_for("curl --form-string=note=hello https://example.com").unwrap();
        assert_eq!(
            options[0],
            CurlOption::Form("note".to_string(), "hello".to_string())
        );
    }

    #[test]
    fn test_credentials_with_and_without_password() {
        let options = options_for("curl -u user:pass https://example.com").unwrap();
        assert_eq!(
            options[0],
            CurlOption::BasicAuth("user".to_string(), Some("pass".to_string()))
        );

        let options = options_for("curl -u user https://example.com").unwrap();
        assert_eq!(options[0], CurlOption::BasicAuth("user".to_string(), None));

        let options = options_for("curl --user=user:pa:ss https://example.com").unwrap();
        assert_eq!(
            options[0],
            CurlOption::BasicAuth("user".to_string(), Some("pa:ss".to_string()))
        );
    }

    #[test]
    fn test_bare_words_become_url_options() {
        let options = options_for("curl https://a.example https://b.example").unwrap();
        assert_eq!(
            options,
            vec![
                CurlOption::Url("https://a.example".to_string()),
                CurlOption::Url("https://b.example".to_string()),
            ]
        );
    }
}
