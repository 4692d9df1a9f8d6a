use eframe::egui::{self, Color32, Key, KeyboardShortcut, Modifiers, RichText, Ui};

use crate::config::Config;
use crate::state::AppState;

pub const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
pub const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
pub const INVERT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::I);

const SAVE_LABEL: &str = "Save as BMP";

/// Hover text naming where "Save as BMP" writes.
fn save_hover_text(config: &Config) -> String {
    format!("Writes {}", config.output_path.display())
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    let ctx = ui.ctx().clone();
    let has_image = state.source.is_some();

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let open =
                egui::Button::new("Open…").shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT));
            if ui.add_enabled(!state.dialog_open(), open).clicked() {
                state.start_open_dialog(&ctx);
                ui.close_menu();
            }

            let save =
                egui::Button::new(SAVE_LABEL).shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT));
            if ui
                .add_enabled(has_image, save)
                .on_hover_text(save_hover_text(&state.config))
                .on_disabled_hover_text(save_hover_text(&state.config))
                .clicked()
            {
                state.save_output();
                ui.close_menu();
            }
        });

        ui.menu_button("Filter", |ui: &mut Ui| {
            let invert =
                egui::Button::new("Invert").shortcut_text(ctx.format_shortcut(&INVERT_SHORTCUT));
            if ui.add_enabled(has_image, invert).clicked() {
                state.apply_invert();
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(path), Some(img)) = (&state.source_path, &state.source) {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let filter = if state.inverted { ", inverted" } else { "" };
            ui.label(format!("{name}  ({}×{}{filter})", img.width(), img.height()));
        }

        if state.dialog_open() {
            ui.separator();
            ui.spinner();
            ui.label("Waiting for file dialog…");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Global shortcuts
// ---------------------------------------------------------------------------

/// Handle the File / Filter menu shortcuts anywhere in the window.
pub fn handle_shortcuts(ctx: &egui::Context, state: &mut AppState) {
    let (open, save, invert) = ctx.input_mut(|i| {
        (
            i.consume_shortcut(&OPEN_SHORTCUT),
            i.consume_shortcut(&SAVE_SHORTCUT),
            i.consume_shortcut(&INVERT_SHORTCUT),
        )
    });

    if open {
        state.start_open_dialog(ctx);
    }
    if state.source.is_some() {
        if invert {
            state.apply_invert();
        }
        if save {
            state.save_output();
        }
    }
}
