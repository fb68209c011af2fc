//! Command handlers for the `pb` binary.

pub mod check;
pub mod reset;
pub mod tasks;
pub mod view;
