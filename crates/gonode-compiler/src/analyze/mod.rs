//! Analysis stage: Go source → IR.
//!
//! - `type_map` - Go type expression → [`BoundaryType`](gonode_core::BoundaryType)
//! - `comments` - doc comment groups and the `//export` marker
//! - `extract` - exported function signatures from a parsed file

mod comments;
mod error;
mod extract;
pub mod type_map;

#[cfg(test)]
mod comments_tests;

pub use error::ExtractError;
pub use extract::extract;
pub use type_map::{TypeExpr, UnsupportedType};
