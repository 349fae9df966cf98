//! Application layer containing service orchestration.

pub mod services;
