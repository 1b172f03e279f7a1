//! Wallet state coordinator
//!
//! Accepts wallet lifecycle commands, runs each against the wallet store
//! through the operation runner, and republishes the resulting state to
//! observers. Every command method returns immediately; results arrive
//! through the observable slots.
//!
//! Store operations execute concurrently as spawned tasks, but all result
//! handling passes through a single update gate, so no two state mutation
//! sequences interleave. The coordinator is a total failure boundary: store
//! errors never propagate past it, they surface as [`ErrorEnvelope`] values
//! on the `error` or `create_error` slot.

use crate::core::observable::ObservableState;
use crate::core::runner::OperationRunner;
use crate::domain::entities::Wallet;
use crate::domain::repositories::WalletStore;
use crate::domain::routing::{ImportWalletRouter, TransactionsRouter};
use crate::shared::constants::IMPORT_REQUEST_CODE;
use crate::shared::error::{ErrorEnvelope, WalletError};
use crate::shared::types::{ExportedStore, UiContext};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use zeroize::Zeroizing;

/// Coordinates wallet lifecycle commands against a [`WalletStore`].
///
/// One coordinator per logical wallet session; constructed with its
/// dependencies injected and torn down explicitly with [`shutdown`]
/// (also invoked on drop), which cancels all outstanding operations.
///
/// [`shutdown`]: WalletCoordinator::shutdown
pub struct WalletCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn WalletStore>,
    import_router: Arc<dyn ImportWalletRouter>,
    transactions_router: Arc<dyn TransactionsRouter>,
    state: ObservableState,
    runner: OperationRunner,
    // serializes all result handling onto one update path
    update_gate: tokio::sync::Mutex<()>,
    pending_password: Mutex<Option<Zeroizing<String>>>,
}

impl WalletCoordinator {
    /// Create a coordinator over the given store and routers.
    ///
    /// No fetch is issued here; the caller drives the first
    /// [`fetch_wallets`](WalletCoordinator::fetch_wallets).
    pub fn new(
        store: Arc<dyn WalletStore>,
        import_router: Arc<dyn ImportWalletRouter>,
        transactions_router: Arc<dyn TransactionsRouter>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                import_router,
                transactions_router,
                state: ObservableState::new(),
                runner: OperationRunner::new(),
                update_gate: tokio::sync::Mutex::new(()),
                pending_password: Mutex::new(None),
            }),
        }
    }

    /// Request the wallet list from the store.
    ///
    /// Success clears progress, publishes the list, then chains a default
    /// lookup whose failure is swallowed; fetch success is independent of
    /// default resolution. Failure clears progress and publishes a generic
    /// error without touching the list.
    pub fn fetch_wallets(&self) {
        Inner::fetch_wallets(&self.inner);
    }

    /// Create a new wallet, consuming the pending creation password if one
    /// was set.
    ///
    /// Progress is raised synchronously in this method so it is observable
    /// even when the store answers fast. Success publishes the created
    /// wallet and chains a list refresh; because the refresh re-raises
    /// progress before anything cleared it, observers see a single
    /// true -> false progress cycle for the whole create-and-refresh chain.
    /// Failure publishes on the dedicated `create_error` slot only and does
    /// not retry.
    pub fn create_wallet(&self) {
        let inner = &self.inner;
        inner.state.progress.publish(true);
        let password = inner.take_pending_password();
        let task_inner = Arc::clone(inner);
        inner.runner.run(async move {
            let result = task_inner.store.create(password).await;
            let gate = task_inner.update_gate.lock().await;
            match result {
                Ok(wallet) => {
                    log::debug!("created wallet {}", wallet.address);
                    task_inner.state.created_wallet.publish(Some(wallet));
                    drop(gate);
                    Inner::fetch_wallets(&task_inner);
                }
                Err(err) => {
                    log::warn!("wallet creation failed: {}", err);
                    task_inner.state.create_error.publish(Some(err.into()));
                }
            }
        });
    }

    /// Mark the given wallet as the store default.
    ///
    /// Success publishes the new default directly, without re-fetching the
    /// list. Failure publishes a generic error; the default is unchanged.
    pub fn set_default(&self, wallet: Wallet) {
        let task_inner = Arc::clone(&self.inner);
        self.inner.runner.run(async move {
            let result = task_inner.store.set_default(&wallet).await;
            let _gate = task_inner.update_gate.lock().await;
            match result {
                Ok(()) => task_inner.on_default_changed(wallet),
                Err(err) => task_inner.on_store_error(err),
            }
        });
    }

    /// Delete the given wallet.
    ///
    /// The store's success result carries the refreshed list, which is
    /// handled exactly like a fetch success: progress cleared, list
    /// published, default lookup chained.
    pub fn delete_wallet(&self, wallet: Wallet) {
        self.inner.state.progress.publish(true);
        let task_inner = Arc::clone(&self.inner);
        self.inner.runner.run(async move {
            let result = task_inner.store.delete(&wallet).await;
            let _gate = task_inner.update_gate.lock().await;
            match result {
                Ok(wallets) => Inner::on_wallets_fetched(&task_inner, wallets),
                Err(err) => task_inner.on_store_error(err),
            }
        });
    }

    /// Export the wallet's serialized keystore.
    ///
    /// Export is not a list-affecting operation: it never touches progress,
    /// the list, or the default, regardless of outcome.
    pub fn export_wallet(&self, wallet: Wallet, current_password: impl Into<String>) {
        let password = Zeroizing::new(current_password.into());
        let task_inner = Arc::clone(&self.inner);
        self.inner.runner.run(async move {
            let result = task_inner.store.export(&wallet, password.as_str()).await;
            let _gate = task_inner.update_gate.lock().await;
            match result {
                Ok(payload) => task_inner.state.exported_store.publish(Some(payload)),
                Err(err) => {
                    log::warn!("wallet export failed: {}", err);
                    task_inner.state.error.publish(Some(ErrorEnvelope::from(err)));
                }
            }
        });
    }

    /// Forward to the external import flow. The flow's result re-enters the
    /// system only through a later explicit `fetch_wallets()` call.
    pub fn request_import(&self, ctx: &UiContext) {
        self.inner.import_router.open_for_result(ctx, IMPORT_REQUEST_CODE);
    }

    /// Forward to the external transactions screen
    pub fn request_show_transactions(&self, ctx: &UiContext, clear_stack: bool) {
        self.inner.transactions_router.open(ctx, clear_stack);
    }

    /// Store a single pending credential for the next `create_wallet()`
    /// call, overwriting any previously pending value. No observable effect.
    pub fn set_pending_creation_password(&self, password: impl Into<String>) {
        let mut pending = self
            .inner
            .pending_password
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *pending = Some(Zeroizing::new(password.into()));
    }

    /// Cancel all outstanding operations and clear progress.
    ///
    /// No result started before this call is delivered afterwards; the
    /// store-side work may still run to completion, its result is discarded.
    pub fn shutdown(&self) {
        self.inner.runner.cancel_all();
        self.inner.state.progress.publish(false);
        log::debug!("wallet coordinator shut down");
    }

    // Observable subscriptions. Each receiver starts at the current value
    // and is notified on every subsequent publish; late subscribers see the
    // most recent value, not history.

    pub fn wallets(&self) -> watch::Receiver<Vec<Wallet>> {
        self.inner.state.wallets.subscribe()
    }

    pub fn default_wallet(&self) -> watch::Receiver<Option<Wallet>> {
        self.inner.state.default_wallet.subscribe()
    }

    pub fn created_wallet(&self) -> watch::Receiver<Option<Wallet>> {
        self.inner.state.created_wallet.subscribe()
    }

    pub fn create_error(&self) -> watch::Receiver<Option<ErrorEnvelope>> {
        self.inner.state.create_error.subscribe()
    }

    pub fn exported_store(&self) -> watch::Receiver<Option<ExportedStore>> {
        self.inner.state.exported_store.subscribe()
    }

    pub fn progress(&self) -> watch::Receiver<bool> {
        self.inner.state.progress.subscribe()
    }

    pub fn error(&self) -> watch::Receiver<Option<ErrorEnvelope>> {
        self.inner.state.error.subscribe()
    }
}

impl Drop for WalletCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Inner {
    fn fetch_wallets(inner: &Arc<Inner>) {
        inner.state.progress.publish(true);
        let task_inner = Arc::clone(inner);
        inner.runner.run(async move {
            let result = task_inner.store.fetch_all().await;
            let _gate = task_inner.update_gate.lock().await;
            match result {
                Ok(wallets) => Inner::on_wallets_fetched(&task_inner, wallets),
                Err(err) => task_inner.on_store_error(err),
            }
        });
    }

    // Shared terminal handler for fetch and delete successes. Progress is
    // cleared before the list is published, so an observer reacting to the
    // list never sees it alongside a raised progress flag.
    fn on_wallets_fetched(inner: &Arc<Inner>, wallets: Vec<Wallet>) {
        log::debug!("fetched {} wallets", wallets.len());
        inner.state.progress.publish(false);
        inner.state.wallets.publish(wallets);
        Inner::find_default(inner);
    }

    fn find_default(inner: &Arc<Inner>) {
        let task_inner = Arc::clone(inner);
        inner.runner.run(async move {
            match task_inner.store.find_default().await {
                Ok(wallet) => {
                    let _gate = task_inner.update_gate.lock().await;
                    task_inner.on_default_changed(wallet);
                }
                // absence of a default is a valid state, not an error
                Err(err) => log::debug!("default lookup resolved nothing: {}", err),
            }
        });
    }

    // When two outstanding operations both resolve the default, the most
    // recently completed one wins; no sequence reconciliation is performed.
    fn on_default_changed(&self, wallet: Wallet) {
        self.state.progress.publish(false);
        self.state.default_wallet.publish(Some(wallet));
    }

    fn on_store_error(&self, err: WalletError) {
        log::warn!("wallet operation failed: {}", err);
        self.state.progress.publish(false);
        self.state.error.publish(Some(ErrorEnvelope::from(err)));
    }

    fn take_pending_password(&self) -> Option<Zeroizing<String>> {
        self.pending_password
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
