//! Domain layer
//!
//! Entities and the contracts the coordinator consumes: the wallet store
//! capability and the external-flow routers.

pub mod entities;
pub mod repositories;
pub mod routing;

// Re-export domain entities
pub use entities::wallet::Wallet;
pub use repositories::wallet_store::WalletStore;
pub use routing::{ImportWalletRouter, TransactionsRouter};
