//! Wallet store capability
//!
//! The backend performing actual key creation, deletion, export and
//! persistence. The coordinator only sequences these calls and reports
//! their outcomes; cryptographic correctness is the implementor's concern.

use crate::domain::entities::Wallet;
use crate::shared::error::WalletError;
use crate::shared::types::ExportedStore;
use async_trait::async_trait;
use zeroize::Zeroizing;

/// Wallet store trait
///
/// Every operation is asynchronous and may fail with a classified
/// [`WalletError`].
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Fetch all wallets, in store order
    async fn fetch_all(&self) -> Result<Vec<Wallet>, WalletError>;

    /// Resolve the wallet currently marked default; fails when none is set
    async fn find_default(&self) -> Result<Wallet, WalletError>;

    /// Create a new wallet, protected by the pending creation password when
    /// one was supplied. The password arrives zeroized-on-drop; implementors
    /// should keep it that way.
    async fn create(&self, pending_password: Option<Zeroizing<String>>)
        -> Result<Wallet, WalletError>;

    /// Mark the given wallet as the default
    async fn set_default(&self, wallet: &Wallet) -> Result<(), WalletError>;

    /// Delete the given wallet and return the refreshed wallet list.
    /// Deletion and re-fetch are one store-side operation.
    async fn delete(&self, wallet: &Wallet) -> Result<Vec<Wallet>, WalletError>;

    /// Export the wallet's serialized keystore, verified against the
    /// current password
    async fn export(
        &self,
        wallet: &Wallet,
        current_password: &str,
    ) -> Result<ExportedStore, WalletError>;
}
