#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for gonode.
//!
//! The intermediate representation (IR) produced by the signature extractor
//! and consumed, read-only, by every artifact emitter:
//! - [`BoundaryType`]: the closed set of value categories that cross the boundary
//! - [`Parameter`]: a named, typed argument
//! - [`ExportedFunction`]: one exported Go function
//! - [`Generation`]: the pair of artifacts produced from an IR sequence

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod utils;


/// Category of a value that can cross from Go, through the native wrapper,
/// into the JavaScript host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryType {
    /// `*C.char` on the Go side, `string` in the host.
    Text,
    /// Any signed integer or float on the Go side, `number` in the host.
    Numeric,
}

impl BoundaryType {
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryType::Text => "text",
            BoundaryType::Numeric => "numeric",
        }
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single function parameter.
///
/// The name is used verbatim in every target language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: BoundaryType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: BoundaryType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// IR record for one exported function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedFunction {
    /// Go name, as declared.
    pub name: String,
    pub params: Vec<Parameter>,
    /// `None` means the function returns nothing.
    pub return_type: Option<BoundaryType>,
    /// Documentation lines joined by `\n`, possibly empty.
    #[serde(default)]
    pub doc: String,
}

impl ExportedFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            doc: String::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: BoundaryType) -> Self {
        self.params.push(Parameter::new(name, ty));
        self
    }

    pub fn returns(mut self, ty: BoundaryType) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Name under which the function is visible to the host (camelCase).
    pub fn external_name(&self) -> String {
        utils::lower_first(&self.name)
    }
}

impl fmt::Display for ExportedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", p.name, p.ty)?;
        }
        f.write_str(")")?;
        if let Some(ty) = self.return_type {
            write!(f, " -> {}", ty)?;
        }
        Ok(())
    }
}

/// Both artifacts generated from one IR sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    /// C++ source of the Node.js addon.
    pub native: String,
    /// TypeScript declaration module.
    pub declaration: String,
}
