//! [`LineInput`] over any buffered reader and writer

use jokebot_application::LineInput;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Writes a label, then reads one line.
///
/// Used with stdin/stdout for the interactive session and with in-memory
/// buffers in tests.
pub struct LineReader<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was written
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineReader<StdinLock<'static>, Stdout> {
    /// Reader over the process's stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput for LineReader<R, W> {
    fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;

        // Bytes that are not UTF-8 still form a line; the session decides
        // whether the (lossily decoded) text means anything.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
