//! Host-language declaration generation.

pub mod typescript;
