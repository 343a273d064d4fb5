//! Compilation from scenes to per-frame drawing instructions.

pub mod frame;
