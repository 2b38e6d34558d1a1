//! Core application primitives (gate, scan runtime)

pub mod gate;
pub mod runtime;

pub use gate::*;
pub use runtime::*;
