//! Signal detection.

pub mod scanner;

pub use scanner::{detect_crossover, trailing_window, CrossoverScanner};
