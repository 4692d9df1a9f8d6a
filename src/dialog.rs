use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui;

use crate::data::loader::SUPPORTED_EXTENSIONS;

// ---------------------------------------------------------------------------
// Background file dialog
// ---------------------------------------------------------------------------

/// Outcome of polling a [`PendingDialog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPoll {
    Pending,
    Picked(PathBuf),
    Cancelled,
}

/// A file dialog running on a worker thread.
///
/// The blocking picker never stalls the UI: the app polls once per frame
/// until a result arrives. There is no cancellation; dropping the handle
/// abandons the result.
pub struct PendingDialog {
    rx: Receiver<Option<PathBuf>>,
}

impl PendingDialog {
    /// Open the native "Open image" picker in the background.
    pub fn open_image(ctx: &egui::Context) -> Self {
        let ctx = ctx.clone();
        Self::spawn(move || {
            let picked = rfd::FileDialog::new()
                .set_title("Open image")
                .add_filter("Images", SUPPORTED_EXTENSIONS)
                .pick_file();
            // Wake the UI so the result is picked up without waiting for input.
            ctx.request_repaint();
            picked
        })
    }

    /// Run `pick` on a worker thread and hand its result back through a channel.
    pub fn spawn<F>(pick: F) -> Self
    where
        F: FnOnce() -> Option<PathBuf> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone if the dialog was abandoned.
            let _ = tx.send(pick());
        });
        Self { rx }
    }

    /// Non-blocking check for a result.
    pub fn poll(&self) -> DialogPoll {
        match self.rx.try_recv() {
            Ok(Some(path)) => DialogPoll::Picked(path),
            Ok(None) => {
                log::debug!("File dialog closed without a selection");
                DialogPoll::Cancelled
            }
            Err(TryRecvError::Empty) => DialogPoll::Pending,
            Err(TryRecvError::Disconnected) => {
                log::warn!("File dialog worker exited without a result");
                DialogPoll::Cancelled
            }
        }
    }
}
