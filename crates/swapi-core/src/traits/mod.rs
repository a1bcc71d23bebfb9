//! Core traits.

mod fetch;

pub use fetch::Fetch;
