//! Configuration for native wrapper emission.

/// Configuration for native wrapper emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Module name, used for the namespace and the cgo header.
    pub(crate) module: String,
}

impl Config {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// cgo-generated header, relative to the wrapper's directory.
    pub(crate) fn header_path(&self) -> String {
        format!("../{}.h", self.module)
    }
}
