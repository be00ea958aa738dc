//! Library side of the `artic-browser` binary.

pub mod input;
pub mod logging;
pub mod render;
pub mod runtime;
pub mod settings;
