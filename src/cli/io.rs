//! Line-oriented I/O for the CLI
//!
//! - Input: one JSON object per line on stdin
//! - Output: one JSON object per line on stdout (raw CSV for export)
//! - UTF-8 only
//!
//! Request bodies are passed to the handler as text so malformed JSON is
//! answered with an error response instead of ending the session.

use std::io::{BufRead, Write};

use super::errors::{CliError, CliResult};

/// Read a single request line
pub fn read_request<R: BufRead>(reader: &mut R) -> CliResult<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(line.trim_end().to_string())
}

/// Read request lines until EOF, skipping blank lines
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(l) if l.trim().is_empty() => None,
        Ok(l) => Some(Ok(l)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Write one JSON line
pub fn write_json<W: Write>(writer: &mut W, json_str: &str) -> CliResult<()> {
    writeln!(writer, "{}", json_str)?;
    writer.flush()?;
    Ok(())
}

/// Write raw text as-is
pub fn write_raw<W: Write>(writer: &mut W, text: &str) -> CliResult<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_request_trims_newline() {
        let mut input = Cursor::new("{\"op\":\"filter\"}\n{\"op\":\"rank\"}\n");
        assert_eq!(read_request(&mut input).unwrap(), "{\"op\":\"filter\"}");
    }

    #[test]
    fn test_read_request_empty() {
        let mut input = Cursor::new("\n");
        assert!(read_request(&mut input).is_err());
    }

    #[test]
    fn test_read_requests_skips_blank_lines() {
        let input = Cursor::new("a\n\n  \nb\n");
        let lines: Vec<String> = read_requests(input).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_write_json_one_line() {
        let mut out = Vec::new();
        write_json(&mut out, "{\"status\":\"ok\"}").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"status\":\"ok\"}\n");
    }
}
