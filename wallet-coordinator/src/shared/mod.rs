//! Shared types, constants, and error definitions
//!
//! This module contains types used throughout the wallet coordinator.

pub mod constants;
pub mod error;
pub mod types;
