//! Opal Admin - state layer for the storefront admin dashboard
//!
//! Headless panels and the product editor: typed drafts, a single mutation
//! entry point, pure submission encoding, and thin gateway-backed list
//! state. Rendering is left to whatever front end drives this crate; the
//! `admin_console` example drives it from a terminal.

pub mod core;
pub mod editor;
pub mod panels;
pub mod workspace;

pub use editor::{EditorEffect, FieldChange, ProductEditor};
pub use workspace::AdminWorkspace;
