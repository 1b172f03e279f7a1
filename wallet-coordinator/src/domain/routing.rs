//! External-flow routers
//!
//! Navigation is outside the coordinator's scope. These traits are
//! pass-through triggers: the coordinator forwards the caller's opaque UI
//! handle and never observes a result. The import flow's eventual outcome
//! re-enters the system only through a later explicit `fetch_wallets()`.

use crate::shared::types::UiContext;

/// Opens the wallet-import flow on the given UI surface. `request_code`
/// identifies the result channel the host UI should answer on.
pub trait ImportWalletRouter: Send + Sync {
    fn open_for_result(&self, ctx: &UiContext, request_code: i32);
}

/// Opens the transactions screen on the given UI surface. `clear_stack`
/// asks the host to drop any navigation history behind it.
pub trait TransactionsRouter: Send + Sync {
    fn open(&self, ctx: &UiContext, clear_stack: bool);
}
