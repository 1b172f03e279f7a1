//! Domain entities

pub mod wallet;

pub use wallet::Wallet;
