//! Accept loop.

pub mod listener;
