//! Prompt messages and placeholder substitution

pub mod messages;
