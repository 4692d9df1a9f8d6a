use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::data::filter::invert;
use crate::data::loader::{load_file, save_bmp};
use crate::data::model::ImageBuffer;
use crate::dialog::{DialogPoll, PendingDialog};
use crate::viewport::ZoomState;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Decoded input image (None until the user opens a file).
    pub source: Option<ImageBuffer>,

    /// Where `source` was loaded from.
    pub source_path: Option<PathBuf>,

    /// Buffer shown in the output pane: a copy of `source` until a filter runs.
    pub output: Option<ImageBuffer>,

    /// Whether `output` currently holds the inverted image.
    pub inverted: bool,

    pub input_zoom: ZoomState,
    pub output_zoom: ZoomState,

    /// Bumped whenever `source` changes so the input pane re-uploads its texture.
    pub input_revision: u64,

    /// Same for `output` and the output pane.
    pub output_revision: u64,

    /// Error message shown in the UI.
    pub status_message: Option<String>,

    /// Open-file dialog running in the background, if any.
    pub dialog: Option<PendingDialog>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            source: None,
            source_path: None,
            output: None,
            inverted: false,
            input_zoom: ZoomState::default(),
            output_zoom: ZoomState::default(),
            input_revision: 0,
            output_revision: 0,
            status_message: None,
            dialog: None,
        }
    }

    /// Load `path` and make it the current image.
    ///
    /// On failure the previously loaded image stays in place.
    pub fn open_path(&mut self, path: &Path) {
        log::info!("Loading image: {}", path.display());
        match load_file(path) {
            Ok(image) => {
                log::info!("Image loaded: {}x{}", image.width(), image.height());
                self.output = Some(image.clone());
                self.source = Some(image);
                self.source_path = Some(path.to_path_buf());
                self.inverted = false;
                self.input_revision += 1;
                self.output_revision += 1;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Error loading image: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Run the invert filter on the source image into the output pane.
    pub fn apply_invert(&mut self) {
        let Some(source) = &self.source else {
            self.status_message = Some("Open an image before applying a filter".to_string());
            return;
        };
        self.output = Some(invert(source));
        self.inverted = true;
        self.output_revision += 1;
        self.status_message = None;
        log::info!("Applied invert filter");
    }

    /// Write the output pane to the configured bitmap path.
    pub fn save_output(&mut self) {
        match self.try_save_output() {
            Ok(path) => {
                log::info!("Saved {}", path.display());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to save image: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn try_save_output(&self) -> Result<PathBuf> {
        let output = self.output.as_ref().context("no image to save")?;
        let path = &self.config.output_path;
        save_bmp(output, path)?;
        Ok(path.clone())
    }

    /// Start the open-file dialog unless one is already showing.
    pub fn start_open_dialog(&mut self, ctx: &eframe::egui::Context) {
        if self.dialog.is_none() {
            self.dialog = Some(PendingDialog::open_image(ctx));
        }
    }

    /// Check the background dialog and open whatever it picked.
    pub fn poll_dialog(&mut self) {
        let Some(dialog) = &self.dialog else {
            return;
        };
        match dialog.poll() {
            DialogPoll::Pending => {}
            DialogPoll::Cancelled => self.dialog = None,
            DialogPoll::Picked(path) => {
                self.dialog = None;
                self.open_path(&path);
            }
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }
}
