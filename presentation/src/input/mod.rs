//! Line-based user input

pub mod line_reader;
