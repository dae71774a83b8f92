#[derive(Debug, Clone)]
pub struct Line<'a> {
    pub raw_text: &'a str,
    pub line_number: usize,
}

#[derive(Debug, Clone)]
pub struct ParseResult {
    pub string: String,
    pub line_number: usize,
}

impl ParseResult {
    pub fn is_blank(&self) -> bool {
        self.string.is_empty()
    }
}

/// Splits a script into lines ending in `\n`, `\r\n` or a lone `\r`.
pub fn split_lines(script: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = Some(script).filter(|text| !text.is_empty());
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\n', '\r']) {
            Some(end) => {
                let width = if text[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[end + width..]).filter(|tail| !tail.is_empty());
                Some(&text[..end])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Strips surrounding whitespace, including the `\r` of CRLF files.
pub fn parse(line: Line) -> ParseResult {
    ParseResult {
        string: line.raw_text.trim().to_string(),
        line_number: line.line_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_line() {
        let line = Line {
            raw_text: "The wind howls.",
            line_number: 1,
        };

        let result = parse(line);
        assert_eq!(result.string, "The wind howls.");
        assert_eq!(result.line_number, 1);
        assert!(!result.is_blank());
    }

    #[test]
    fn test_parse_strips_indentation_and_carriage_return() {
        let line = Line {
            raw_text: "    Go back -> Start\r",
            line_number: 3,
        };

        let result = parse(line);
        assert_eq!(result.string, "Go back -> Start");
    }

    #[test]
    fn test_split_lines_accepts_every_line_ending() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        let lines: Vec<&str> = split_lines("a\r\rb\r\n\r\nc\r").collect();
        assert_eq!(lines, vec!["a", "", "b", "", "c"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_parse_whitespace_only() {
        let line = Line {
            raw_text: " \t  ",
            line_number: 2,
        };

        assert!(parse(line).is_blank());
    }
}
