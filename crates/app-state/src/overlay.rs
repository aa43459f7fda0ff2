//! Modal and loading-indicator UI state.

use place_data::PlaceId;
use tokio::sync::watch;

/// The modal dialogs the shell can present. At most one is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    PlaceDetail(PlaceId),
    Login,
    Settings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayUi {
    pub modal: Option<Modal>,
    pub loading: bool,
}

/// Holds the transient overlay UI flags.
pub struct OverlayState {
    tx: watch::Sender<OverlayUi>,
}

impl OverlayState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(OverlayUi::default());
        Self { tx }
    }

    /// Open a modal, replacing any currently open one.
    pub fn open(&self, modal: Modal) {
        self.tx.send_modify(|ui| ui.modal = Some(modal));
    }

    pub fn close(&self) {
        self.tx.send_modify(|ui| ui.modal = None);
    }

    pub fn set_loading(&self, loading: bool) {
        self.tx.send_modify(|ui| ui.loading = loading);
    }

    pub fn active_modal(&self) -> Option<Modal> {
        self.tx.borrow().modal.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().loading
    }

    pub fn subscribe(&self) -> watch::Receiver<OverlayUi> {
        self.tx.subscribe()
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}
