//! Console prompt helpers

use std::io::{self, BufRead, Write};

/// Writes `prompt` without a newline and reads one line of input.
///
/// Returns `None` at end of input. The line terminator is removed and
/// nothing else.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(strip_line_ending(&line).to_string()))
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_line() {
        let mut input = Cursor::new("alice\r\nbob\n");
        let mut out = Vec::new();

        assert_eq!(ask(&mut input, &mut out, "> ").unwrap(), Some("alice".to_string()));
        assert_eq!(ask(&mut input, &mut out, "> ").unwrap(), Some("bob".to_string()));
        assert_eq!(ask(&mut input, &mut out, "> ").unwrap(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "> > > ");
    }

    #[test]
    fn test_ask_keeps_inner_whitespace() {
        let mut input = Cursor::new(" alice \n");
        let mut out = Vec::new();
        assert_eq!(ask(&mut input, &mut out, "").unwrap(), Some(" alice ".to_string()));
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut input = Cursor::new("y");
        let mut out = Vec::new();
        assert_eq!(ask(&mut input, &mut out, "").unwrap(), Some("y".to_string()));
    }
}
