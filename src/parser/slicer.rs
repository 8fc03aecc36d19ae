//! Shell-like word splitting for curl command text.
//!
//! Splits raw command text into words the way a shell would: quotes make
//! whitespace literal, adjacent quoted and unquoted runs glue into one
//! word, and a backslash before a line break joins physical lines.

/// Split raw command text into shell-like words.
///
/// Quote characters never appear in the output. An unterminated quote
/// does not fail; whatever was scanned becomes the final word.
pub fn slice(command: &str) -> Vec<String> {
    let joined = join_continuations(command);
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = joined.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => scan_quoted(&mut chars, c, &mut current),
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Consume characters up to the closing quote, appending them to `buffer`.
///
/// A backslash immediately before the closing quote character escapes it:
/// the backslash is dropped, the quote is kept literally, and the scan
/// continues. Only a backslash scanned inside this segment counts; one
/// glued on before the quote opened stays literal. Reaching end of input
/// leaves the buffer as-is.
fn scan_quoted(chars: &mut std::str::Chars<'_>, quote: char, buffer: &mut String) {
    let segment = buffer.len();
    for c in chars.by_ref() {
        if c == quote {
            if buffer.len() > segment && buffer.ends_with('\\') {
                buffer.pop();
                buffer.push(quote);
                continue;
            }
            return;
        }
        buffer.push(c);
    }
}

/// Collapse backslash line continuations into a single space.
///
/// A backslash, optional blanks or tabs, a line break, and any leading
/// blanks or tabs on the next line count as one continuation. Quoting is
/// not considered at this stage, which matches how pasted multi-line
/// commands read.
fn join_continuations(command: &str) -> String {
    let bytes = command.as_bytes();
    let mut joined = String::with_capacity(command.len());
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' {
            if let Some(end) = continuation_end(bytes, i + 1) {
                joined.push_str(&command[start..i]);
                joined.push(' ');
                i = end;
                start = end;
                continue;
            }
        }
        i += 1;
    }

    joined.push_str(&command[start..]);
    joined
}

/// Index just past a line continuation that starts after a backslash, if
/// the following bytes really form one.
fn continuation_end(bytes: &[u8], mut i: usize) -> Option<usize> {
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'\n') => i += 1,
        Some(b'\r') => {
            i += 1;
            if bytes.get(i) == Some(&b'\n') {
                i += 1;
            }
        }
        _ => return None,
    }
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    Some(i)
}
