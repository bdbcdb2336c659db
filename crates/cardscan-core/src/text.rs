use std::borrow::Cow;

/// OCR output split into trimmed, non-empty lines, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OcrText {
    lines: Vec<String>,
}

impl OcrText {
    pub fn parse(raw: &str) -> Self {
        let lines = normalize_line_endings(raw)
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

pub fn split_lines(raw: &str) -> Vec<String> {
    OcrText::parse(raw).into_lines()
}

fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if matches!(chars.peek(), Some('\n')) {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::{split_lines, OcrText};

    #[test]
    fn split_lines_trims_and_drops_blank_lines() {
        let lines = split_lines("  Rachel Tan \n\n   \nManager\n");
        assert_eq!(lines, vec!["Rachel Tan", "Manager"]);
    }

    #[test]
    fn split_lines_accepts_crlf_and_cr() {
        let lines = split_lines("one\r\ntwo\rthree");
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let text = OcrText::parse("");
        assert!(text.is_empty());
        assert_eq!(text.len(), 0);
    }
}
