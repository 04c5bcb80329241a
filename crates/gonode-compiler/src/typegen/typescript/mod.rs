//! TypeScript declaration module for the addon.
//!
//! Renders one interface member per exported function, then binds the
//! loaded addon to that interface:
//!
//! ```text
//! export interface Calculator {
//!   sum: (x: number, y: number) => number;
//! }
//!
//! const addon: Calculator = require("calculator");
//!
//! export default addon;
//! ```

mod config;
mod emitter;
mod render;


pub use config::{Config, VoidType};
pub use emitter::{Emitter, emit};
