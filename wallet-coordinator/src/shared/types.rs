//! Common types for wallet coordination

use serde::{Deserialize, Serialize};

// Basic types for wallet operations
pub type Address = String;
pub type ExportedStore = String;

/// Opaque handle identifying the UI surface an externally routed flow
/// (import, transactions) should attach to. The coordinator never inspects
/// it; it is passed through to the routers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiContext(pub String);

impl UiContext {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_context_is_opaque_passthrough() {
        let ctx = UiContext::new("main-window");
        assert_eq!(ctx, UiContext("main-window".to_string()));
    }
}
