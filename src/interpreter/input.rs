use std::{collections::VecDeque, io::BufRead};

/// Supplies the numeric values requested by read-statements.
///
/// Input is split on whitespace, so a single line such as `3 4` answers two
/// read-statements in a row.
pub struct NumberReader<R> {
    reader:  R,
    pending: VecDeque<String>,
}

impl<R: BufRead> NumberReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self { reader,
               pending: VecDeque::new() }
    }

    /// Returns the next whitespace-separated word, or `None` once the input is
    /// exhausted.
    ///
    /// # Errors
    /// Propagates any I/O error from the underlying reader.
    pub fn next_word(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
