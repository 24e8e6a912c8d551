//! Domain types and pure prompt logic for Lenscraft.
//!
//! Nothing in this crate performs I/O: camera settings parsing, the prompt
//! enhancer, and prompt composition are all deterministic functions of their
//! inputs.

pub mod camera;
pub mod enhancer;
pub mod error;
pub mod prompt;
