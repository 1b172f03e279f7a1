//! Repository contracts consumed by the coordinator

pub mod wallet_store;

pub use wallet_store::WalletStore;
