#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, frames, and hit testing.

pub mod buffer;
pub mod cell;
pub mod frame;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
pub use frame::{Frame, HitData, HitId, HitRegion};
