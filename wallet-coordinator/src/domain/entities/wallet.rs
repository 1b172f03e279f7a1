//! Wallet entity
//!
//! A wallet is an immutable value once fetched from the store: an address
//! (the identifier) plus display metadata. Equality and hashing go by
//! address only, so two fetches of the same wallet compare equal even when
//! metadata such as the label was edited in between.

use crate::shared::constants::{WALLET_LABEL_MAX_LENGTH, WALLET_LABEL_MIN_LENGTH};
use crate::shared::error::WalletError;
use crate::shared::types::Address;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Core wallet entity. Holds no key material; the store owns secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub address: Address,
    pub label: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Wallet {
    pub fn new(address: impl Into<Address>, label: impl Into<String>) -> Result<Self, WalletError> {
        let address = address.into();
        let label = label.into();
        if address.is_empty() {
            return Err(WalletError::validation("Wallet address cannot be empty"));
        }
        if label.len() < WALLET_LABEL_MIN_LENGTH {
            return Err(WalletError::validation("Wallet label cannot be empty"));
        }
        if label.len() > WALLET_LABEL_MAX_LENGTH {
            return Err(WalletError::validation(format!(
                "Wallet label exceeds {} characters",
                WALLET_LABEL_MAX_LENGTH
            )));
        }

        Ok(Self {
            address,
            label,
            created_at: chrono::Utc::now(),
        })
    }
}

impl PartialEq for Wallet {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Wallet {}

impl Hash for Wallet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}
