#![forbid(unsafe_code)]

//! Style types for curtain with cascading merge semantics.

pub mod style;

pub use style::Style;
