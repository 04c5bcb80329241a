/// Errors raised while turning IR into an artifact.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    #[error("exported function at position {index} has an empty name")]
    EmptyName { index: usize },

    #[error("parameter {index} of `{function}` has an empty name")]
    EmptyParameterName { function: String, index: usize },

    /// Two functions map to the same host-visible name.
    #[error("`{name}` is exported more than once")]
    DuplicateExport { name: String },

    /// The module name is used as a C++ namespace and must be a C identifier.
    #[error("invalid module name `{name}`: expected a C identifier")]
    InvalidModuleName { name: String },
}
