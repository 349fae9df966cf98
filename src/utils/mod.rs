//! Shared utility functions.

pub mod code_generator;
