//! Infrastructure implementations of the domain contracts

pub mod memory;

pub use memory::MemoryWalletStore;
