//! Line input port
//!
//! Line-oriented reads from whatever the user types into.

use std::io;

/// Blocking, line-at-a-time user input
pub trait LineInput {
    /// Show `label` and read one line.
    ///
    /// Returns `Ok(None)` once the input is closed. The returned line has
    /// its terminator stripped but is otherwise untouched.
    fn read_line(&mut self, label: &str) -> io::Result<Option<String>>;
}
