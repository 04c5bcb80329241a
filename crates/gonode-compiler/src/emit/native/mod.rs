//! C++ wrapper for the legacy Node.js addon API.
//!
//! Every exported Go function gets a `<Name>_Func` callback that checks and
//! converts its JavaScript arguments, calls the Go symbol through the cgo
//! header, and converts the result back. `Init` registers each callback under
//! the function's camelCase name.

mod config;
mod emitter;
pub mod templates;

#[cfg(test)]
mod templates_tests;

pub use config::Config;
pub use emitter::{Emitter, emit};
