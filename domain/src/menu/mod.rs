//! Menu subdomain
//!
//! - [`choice::MenuChoice`]: the five actions offered on the main menu
//! - [`screen::Screen`]: states of the session loop and the routing between them
//! - [`selection::select_index`]: numbered selection used by the category and language screens

pub mod choice;
pub mod screen;
pub mod selection;
