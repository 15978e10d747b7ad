//! Session subdomain: the state a single run of the joke loop carries.

pub mod history;
pub mod state;
