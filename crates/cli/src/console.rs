//! Line-oriented console collaborators: where input comes from and where
//! display lines go.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of raw input lines (one prompt answer per line).
pub trait InputProvider {
    /// Next line without its line break, or `None` once input is exhausted.
    ///
    /// `Some(Err(..))` means one line was consumed but could not be read as
    /// text; the provider is still usable afterwards.
    fn next_line(&mut self) -> Option<io::Result<String>>;
}

/// Destination for display lines. Fire-and-forget.
pub trait OutputSink {
    fn line(&mut self, text: &str);
}

impl<T: InputProvider + ?Sized> InputProvider for &mut T {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        (**self).next_line()
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn line(&mut self, text: &str) {
        (**self).line(text)
    }
}

/// Reads answers from any buffered reader (stdin in the binary).
#[derive(Debug)]
pub struct StdinInput<R> {
    reader: R,
}

impl<R: BufRead> StdinInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputProvider for StdinInput<R> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = buf.trim_end_matches(['\n', '\r']).len();
                buf.truncate(trimmed);
                Some(Ok(buf))
            }
            // `read_line` consumes the whole line before rejecting non-UTF-8
            // bytes, so the next call starts on the following line.
            Err(err) if err.kind() == io::ErrorKind::InvalidData => Some(Err(err)),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read input line");
                None
            }
        }
    }
}

/// Writes display lines to any writer (stdout in the binary).
#[derive(Debug)]
pub struct StdoutSink<W: Write> {
    writer: W,
}

impl<W: Write> StdoutSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> OutputSink for StdoutSink<W> {
    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{text}") {
            tracing::warn!(error = %err, "failed to write output line");
        }
    }
}

/// Pre-recorded answers, for tests and batch runs.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.lines.pop_front().map(Ok)
    }
}

/// Collects display lines in memory.
#[derive(Debug, Default, Clone)]
pub struct CapturedOutput {
    lines: Vec<String>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.lines.iter().any(|l| l.contains(fragment))
    }
}

impl OutputSink for CapturedOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: Option<io::Result<String>>) -> Option<String> {
        line.map(|l| l.unwrap())
    }

    #[test]
    fn stdin_input_strips_line_breaks() {
        let mut input = StdinInput::new("3\r\nLaptop Pro\n\nlast".as_bytes());
        assert_eq!(text(input.next_line()).as_deref(), Some("3"));
        assert_eq!(text(input.next_line()).as_deref(), Some("Laptop Pro"));
        assert_eq!(text(input.next_line()).as_deref(), Some(""));
        assert_eq!(text(input.next_line()).as_deref(), Some("last"));
        assert!(input.next_line().is_none());
    }

    #[test]
    fn stdin_input_reports_non_utf8_line_and_moves_on() {
        let mut input = StdinInput::new(&b"1\n\xff\xfe\nMilk\n"[..]);
        assert_eq!(text(input.next_line()).as_deref(), Some("1"));

        let err = input.next_line().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        assert_eq!(text(input.next_line()).as_deref(), Some("Milk"));
        assert!(input.next_line().is_none());
    }

    #[test]
    fn stdout_sink_writes_lines() {
        let mut sink = StdoutSink::new(Vec::new());
        sink.line("first");
        sink.line("second");
        sink.flush().unwrap();
        assert_eq!(String::from_utf8(sink.writer).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new(["a", "b"]);
        assert_eq!(input.remaining(), 2);
        assert_eq!(text(input.next_line()).as_deref(), Some("a"));
        assert_eq!(text(input.next_line()).as_deref(), Some("b"));
        assert!(input.next_line().is_none());
    }
}
