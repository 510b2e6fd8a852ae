//! Reading the paste body
//!
//! Piped standard input beats the `--body` flag. An empty pipe counts as no
//! input, so the flag still applies.

use std::io::{IsTerminal, Read};

use crate::error::PastemeResult;

/// True when standard input is a pipe or file rather than a terminal
pub fn stdin_is_piped() -> bool {
    !std::io::stdin().is_terminal()
}

/// Read everything from a piped reader
pub fn read_piped<R: Read>(mut reader: R) -> PastemeResult<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Pick the paste body from piped input and the `--body` flag
pub fn resolve_body(piped: Option<String>, flag: Option<&str>) -> String {
    match piped {
        Some(text) if !text.is_empty() => text,
        _ => flag.unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piped_wins_over_flag() {
        let body = resolve_body(Some("pipedtext".into()), Some("flagtext"));
        assert_eq!(body, "pipedtext");
    }

    #[test]
    fn test_flag_used_without_pipe() {
        assert_eq!(resolve_body(None, Some("flagtext")), "flagtext");
    }

    #[test]
    fn test_empty_pipe_falls_back_to_flag() {
        assert_eq!(resolve_body(Some(String::new()), Some("flagtext")), "flagtext");
    }

    #[test]
    fn test_nothing_gives_empty_body() {
        assert_eq!(resolve_body(None, None), "");
        assert_eq!(resolve_body(Some(String::new()), None), "");
    }

    #[test]
    fn test_read_piped_keeps_content_verbatim() {
        let text = read_piped("line one\nline two\n".as_bytes()).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_read_piped_rejects_invalid_utf8() {
        let err = read_piped(&[0xff, 0xfe, 0x00][..]).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }
}
