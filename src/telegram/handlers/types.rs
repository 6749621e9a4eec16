//! Handler types and dependencies

use std::sync::Arc;

use crate::storage::ContentStore;
use crate::telegram::dialog::DialogTracker;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: Arc<ContentStore>,
    pub dialog: Arc<DialogTracker>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(store: Arc<ContentStore>, dialog: Arc<DialogTracker>) -> Self {
        Self { store, dialog }
    }
}
