//! Line splitting for input files.
//!
//! `\n`, `\r\n` and a bare `\r` all end a line. A terminator at the very end
//! of the content does not produce a trailing empty line.

/// Iterator over the lines of a string. See [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

/// Split `content` into lines on `\n`, `\r\n` or `\r`.
pub fn split_lines(content: &str) -> SplitLines<'_> {
    SplitLines { rest: content }
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut self.rest));
        };

        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(content: &str) -> Vec<&str> {
        split_lines(content).collect()
    }

    #[test]
    fn test_split_lf() {
        assert_eq!(collect("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_crlf() {
        assert_eq!(collect("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_bare_cr() {
        assert_eq!(collect("a\rb\rc\r"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_mixed_terminators() {
        assert_eq!(collect("a\rb\r\nc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_keeps_blank_lines() {
        assert_eq!(collect("a\n\nb\r\rc"), vec!["a", "", "b", "", "c"]);
    }

    #[test]
    fn test_split_cr_then_lf_is_one_break() {
        assert_eq!(collect("\r\n"), vec![""]);
        assert_eq!(collect("\n\r"), vec!["", ""]);
    }

    #[test]
    fn test_split_empty() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_split_no_terminator() {
        assert_eq!(collect("only"), vec!["only"]);
    }
}
