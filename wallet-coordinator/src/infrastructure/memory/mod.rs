//! In-memory wallet store
//!
//! A [`WalletStore`] backed by process memory. Useful as a development
//! backend and for exercising the coordinator without an external
//! key-management service. The export payload is a keystore-info JSON
//! document, not encrypted key material; cryptographic storage is a real
//! backend's concern.

use crate::domain::entities::Wallet;
use crate::domain::repositories::WalletStore;
use crate::shared::constants::{KEYSTORE_VERSION, MAX_WALLET_COUNT, WALLET_ADDRESS_BYTES};
use crate::shared::error::WalletError;
use crate::shared::types::{Address, ExportedStore};
use async_trait::async_trait;
use rand::RngCore;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use zeroize::Zeroizing;

struct StoredWallet {
    wallet: Wallet,
    password: Option<Zeroizing<String>>,
}

#[derive(Default)]
struct StoreState {
    wallets: Vec<StoredWallet>,
    default_address: Option<Address>,
}

/// In-memory wallet store
#[derive(Clone, Default)]
pub struct MemoryWalletStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Serialize)]
struct KeystoreInfo<'a> {
    version: u32,
    id: String,
    address: &'a str,
    label: &'a str,
    exported_at: i64,
}

impl MemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing wallets, none protected by a password
    /// and none marked default
    pub async fn with_wallets(wallets: Vec<Wallet>) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.write().await;
            state.wallets = wallets
                .into_iter()
                .map(|wallet| StoredWallet { wallet, password: None })
                .collect();
        }
        store
    }

    fn generate_address() -> Address {
        let mut bytes = [0u8; WALLET_ADDRESS_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        format!("0x{}", hex::encode(bytes))
    }
}

#[async_trait]
impl WalletStore for MemoryWalletStore {
    async fn fetch_all(&self) -> Result<Vec<Wallet>, WalletError> {
        let state = self.state.read().await;
        Ok(state.wallets.iter().map(|s| s.wallet.clone()).collect())
    }

    async fn find_default(&self) -> Result<Wallet, WalletError> {
        let state = self.state.read().await;
        let address = state.default_address.as_ref().ok_or(WalletError::NoDefaultWallet)?;
        state
            .wallets
            .iter()
            .find(|s| &s.wallet.address == address)
            .map(|s| s.wallet.clone())
            .ok_or(WalletError::NoDefaultWallet)
    }

    async fn create(
        &self,
        pending_password: Option<Zeroizing<String>>,
    ) -> Result<Wallet, WalletError> {
        let mut state = self.state.write().await;
        if state.wallets.len() >= MAX_WALLET_COUNT {
            return Err(WalletError::storage(format!(
                "Wallet limit of {} reached",
                MAX_WALLET_COUNT
            )));
        }

        let label = format!("Wallet {}", state.wallets.len() + 1);
        let wallet = Wallet::new(Self::generate_address(), label)?;
        log::info!("created wallet {}", wallet.address);
        state.wallets.push(StoredWallet {
            wallet: wallet.clone(),
            password: pending_password,
        });
        Ok(wallet)
    }

    async fn set_default(&self, wallet: &Wallet) -> Result<(), WalletError> {
        let mut state = self.state.write().await;
        if !state.wallets.iter().any(|s| s.wallet.address == wallet.address) {
            return Err(WalletError::wallet_not_found(wallet.address.clone()));
        }
        state.default_address = Some(wallet.address.clone());
        Ok(())
    }

    async fn delete(&self, wallet: &Wallet) -> Result<Vec<Wallet>, WalletError> {
        let mut state = self.state.write().await;
        let before = state.wallets.len();
        state.wallets.retain(|s| s.wallet.address != wallet.address);
        if state.wallets.len() == before {
            return Err(WalletError::wallet_not_found(wallet.address.clone()));
        }
        if state.default_address.as_ref() == Some(&wallet.address) {
            state.default_address = None;
        }
        log::info!("deleted wallet {}", wallet.address);
        Ok(state.wallets.iter().map(|s| s.wallet.clone()).collect())
    }

    async fn export(
        &self,
        wallet: &Wallet,
        current_password: &str,
    ) -> Result<ExportedStore, WalletError> {
        let state = self.state.read().await;
        let stored = state
            .wallets
            .iter()
            .find(|s| s.wallet.address == wallet.address)
            .ok_or_else(|| WalletError::wallet_not_found(wallet.address.clone()))?;

        let stored_password = stored.password.as_ref().map(|p| p.as_str()).unwrap_or("");
        if stored_password != current_password {
            return Err(WalletError::invalid_password(
                "Export password does not match",
            ));
        }

        let info = KeystoreInfo {
            version: KEYSTORE_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            address: &stored.wallet.address,
            label: &stored.wallet.label,
            exported_at: chrono::Utc::now().timestamp(),
        };
        Ok(serde_json::to_string(&info)?)
    }
}
