//! Core coordination functionality
//!
//! This module contains the coordinator, its observable state, and the
//! runner owning all in-flight asynchronous operations.

pub mod coordinator;
pub mod observable;
pub mod runner;

pub use coordinator::WalletCoordinator;
pub use observable::{ObservableState, StateSlot};
pub use runner::OperationRunner;
