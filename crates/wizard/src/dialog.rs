//! Shared open/closed state of the order dialog.

use std::sync::Arc;

use tokio::sync::watch;

/// Open/closed flag shared by everything that shows or hides the order form.
///
/// Create one at the page composition root and clone it into each
/// collaborator (launch buttons, the awareness popup, the dialog itself).
/// Clones observe and change the same flag.
#[derive(Debug, Clone)]
pub struct OrderDialog {
    open: Arc<watch::Sender<bool>>,
}

impl OrderDialog {
    /// Creates a closed dialog.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { open: Arc::new(tx) }
    }

    pub fn is_open(&self) -> bool {
        *self.open.borrow()
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    pub fn set_open(&self, open: bool) {
        let was_open = self.open.send_replace(open);
        if was_open != open {
            tracing::debug!(open, "order dialog toggled");
        }
    }

    /// Returns a receiver that observes every change to the flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.open.subscribe()
    }

    /// Returns a callback that closes this dialog, suitable for
    /// [`WizardBuilder::on_submit_success`](crate::WizardBuilder::on_submit_success).
    pub fn close_handle(&self) -> impl Fn() + Send + Sync + 'static {
        let dialog = self.clone();
        move || dialog.close()
    }
}

impl Default for OrderDialog {
    fn default() -> Self {
        Self::new()
    }
}
