//! Core state primitives

pub mod list;

pub use list::ListState;
