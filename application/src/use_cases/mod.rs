//! Use cases

pub mod session_controller;
