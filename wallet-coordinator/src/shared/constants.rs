//! Constants for the wallet coordinator

// External flow request codes
pub const IMPORT_REQUEST_CODE: i32 = 1001;

// Wallet constants
pub const WALLET_LABEL_MAX_LENGTH: usize = 50;
pub const WALLET_LABEL_MIN_LENGTH: usize = 1;
pub const WALLET_ADDRESS_BYTES: usize = 20;
pub const MAX_WALLET_COUNT: usize = 100;

// Export payload format
pub const KEYSTORE_VERSION: u32 = 3;

// Logging
pub const LOG_FILTER_ENV: &str = "WALLET_COORDINATOR_LOG";
pub const DEFAULT_LOG_FILTER: &str = if cfg!(debug_assertions) { "debug" } else { "info" };

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
