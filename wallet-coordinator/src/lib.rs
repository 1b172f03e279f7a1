//! Wallet Coordinator
//!
//! Sequences wallet lifecycle commands (create, fetch-all, delete,
//! set-default, export, import-trigger) against an underlying wallet store
//! and republishes the resulting state to observers.
//!
//! ## Architecture
//!
//! - **Core**: the coordinator, its observable state slots, and the
//!   operation runner owning all in-flight asynchronous calls
//! - **Domain**: the wallet entity plus the store and router contracts
//! - **Infrastructure**: an in-memory store implementation
//! - **Shared**: common types, constants, and errors
//!
//! The coordinator never blocks: every command method returns immediately
//! and results arrive through last-value-wins observable slots. Tearing a
//! coordinator down cancels all outstanding operations, so no stale result
//! is delivered afterwards.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_coordinator::{
//!     ImportWalletRouter, MemoryWalletStore, TransactionsRouter, UiContext, WalletCoordinator,
//! };
//!
//! struct NoopRouters;
//!
//! impl ImportWalletRouter for NoopRouters {
//!     fn open_for_result(&self, _ctx: &UiContext, _request_code: i32) {}
//! }
//!
//! impl TransactionsRouter for NoopRouters {
//!     fn open(&self, _ctx: &UiContext, _clear_stack: bool) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let routers = Arc::new(NoopRouters);
//!     let coordinator = WalletCoordinator::new(
//!         Arc::new(MemoryWalletStore::new()),
//!         routers.clone(),
//!         routers,
//!     );
//!
//!     let mut wallets = coordinator.wallets();
//!     coordinator.fetch_wallets();
//!     wallets.changed().await.unwrap();
//!     println!("{} wallets", wallets.borrow().len());
//! }
//! ```

use dotenv::dotenv;
use std::env;

// Re-export main modules for easy access
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use shared::constants::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV};

// Re-export specific components
pub use crate::core::coordinator::WalletCoordinator;
pub use crate::core::observable::{ObservableState, StateSlot};
pub use crate::core::runner::OperationRunner;
pub use infrastructure::memory::MemoryWalletStore;

// Re-export domain entities and contracts
pub use domain::entities::Wallet;
pub use domain::repositories::WalletStore;
pub use domain::routing::{ImportWalletRouter, TransactionsRouter};

// Re-export shared types
pub use shared::error::{ErrorEnvelope, ErrorKind, WalletError};
pub use shared::types::{Address, ExportedStore, UiContext};

/// Initialize logging from `.env` or safe defaults
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok(); // Load .env if present

    let filter = env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    env_logger::Builder::new().parse_filters(&filter).try_init()?;
    Ok(())
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
