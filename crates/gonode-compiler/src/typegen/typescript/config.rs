//! Configuration types for TypeScript emission.

/// How to represent a missing return value in TypeScript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoidType {
    /// `void` - the result is not meant to be used
    #[default]
    Void,
    /// `undefined` - the absence of a value
    Undefined,
}

impl VoidType {
    pub fn as_str(self) -> &'static str {
        match self {
            VoidType::Void => "void",
            VoidType::Undefined => "undefined",
        }
    }
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Addon module name; the interface is named after it
    pub(crate) module: String,
    /// Whether to export the interface
    pub(crate) export: bool,
    /// Argument to `require`, defaults to the module name
    pub(crate) require_path: Option<String>,
    /// How to represent the void type
    pub(crate) void_type: VoidType,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            export: true,
            require_path: None,
            void_type: VoidType::default(),
        }
    }

    /// Set whether to export the interface.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set the path passed to `require`.
    pub fn require_path(mut self, path: impl Into<String>) -> Self {
        self.require_path = Some(path.into());
        self
    }

    /// Set the void type representation.
    pub fn void_type(mut self, value: VoidType) -> Self {
        self.void_type = value;
        self
    }
}
