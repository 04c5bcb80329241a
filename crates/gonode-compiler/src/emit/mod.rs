//! Native wrapper emission and the IR checks shared by every emitter.
//!
//! - `validate` - rejects IR that would produce inconsistent artifacts
//! - `native` - C++ Node.js addon wrapper (legacy V8 API)

mod error;
pub mod native;
mod validate;


pub use error::EmitError;
pub use validate::{validate, validate_module};
