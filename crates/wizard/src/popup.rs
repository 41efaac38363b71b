//! Delayed "start a project" popup that opens the order dialog.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::dialog::OrderDialog;

#[derive(Debug, Default)]
struct PopupState {
    visible: bool,
    dismissed: bool,
}

/// A launcher that appears after a delay and opens the shared dialog.
///
/// Once dismissed it stays hidden for the rest of the page lifetime.
#[derive(Debug, Clone)]
pub struct AwarenessPopup {
    dialog: OrderDialog,
    reveal_delay: Duration,
    state: Arc<Mutex<PopupState>>,
}

impl AwarenessPopup {
    pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_secs(3);

    pub fn new(dialog: OrderDialog) -> Self {
        Self {
            dialog,
            reveal_delay: Self::DEFAULT_REVEAL_DELAY,
            state: Arc::default(),
        }
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Waits out the reveal delay, then shows the popup.
    pub async fn run_reveal_timer(&self) {
        tokio::time::sleep(self.reveal_delay).await;
        self.reveal();
    }

    /// Shows the popup unless it was dismissed. Returns the new visibility.
    pub fn reveal(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !state.dismissed {
            state.visible = true;
        }
        state.visible
    }

    pub fn dismiss(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.dismissed = true;
        state.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .visible
    }

    /// Opens the order dialog.
    pub fn launch(&self) {
        self.dialog.open();
    }
}
