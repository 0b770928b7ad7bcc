//! Font list CLI library.

pub mod cli;
