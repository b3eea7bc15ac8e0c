//! Shared building blocks for the phonebook workspace: logging setup and
//! small wire types used by more than one crate.

pub mod types;
pub mod utils;
