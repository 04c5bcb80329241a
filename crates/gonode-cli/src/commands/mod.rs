pub mod check;
pub mod emit;
pub mod generate;
pub mod ir;
pub mod project;
pub mod reporter;
pub mod run_common;
