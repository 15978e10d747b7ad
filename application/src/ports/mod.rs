//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod joke_source;
pub mod line_input;
pub mod prompt_store;
pub mod session_logger;
pub mod session_view;
