//! Mapping from Go type expressions to boundary types.
//!
//! Only a fixed set of primitives may cross the boundary. Everything else is
//! rejected rather than approximated.

use std::fmt;

use gonode_core::BoundaryType;

/// Go numeric primitives accepted as `Numeric`. Width is not preserved.
pub const NUMERIC_PRIMITIVES: &[&str] = &[
    "int", "int8", "int16", "int32", "int64", "float32", "float64",
];

/// Shape of a Go type expression, as far as the mapper cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// Bare type identifier, e.g. `float64`.
    Ident(String),
    /// Pointer to a package-qualified type, e.g. `*C.char`.
    PointerToSelector { package: String, name: String },
    /// Any other expression, kept as written in the source.
    Other(String),
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Ident(name) => f.write_str(name),
            TypeExpr::PointerToSelector { package, name } => write!(f, "*{}.{}", package, name),
            TypeExpr::Other(raw) => f.write_str(raw),
        }
    }
}

/// A type expression outside the supported set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported type `{0}`")]
pub struct UnsupportedType(pub String);

/// Map a type expression to its boundary type.
pub fn map(expr: &TypeExpr) -> Result<BoundaryType, UnsupportedType> {
    match expr {
        TypeExpr::Ident(name) if NUMERIC_PRIMITIVES.contains(&name.as_str()) => {
            Ok(BoundaryType::Numeric)
        }
        TypeExpr::PointerToSelector { package, name } if package == "C" && name == "char" => {
            Ok(BoundaryType::Text)
        }
        TypeExpr::Ident(_) | TypeExpr::PointerToSelector { .. } | TypeExpr::Other(_) => {
            Err(UnsupportedType(expr.to_string()))
        }
    }
}
