use eframe::egui::{
    self, load::SizedTexture, Key, KeyboardShortcut, Modifiers, Rect, ScrollArea, Sense,
    TextureHandle, TextureOptions, Ui,
};

use crate::data::model::ImageBuffer;
use crate::viewport::{centered_offset, ZoomState};

pub const FIT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Num0);
pub const ACTUAL_SIZE_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND, Key::Num1);
pub const ZOOM_IN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Plus);
pub const ZOOM_OUT_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND, Key::Minus);
// Ctrl+= is Ctrl++ without shift on most layouts.
const ZOOM_IN_ALT_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND, Key::Equals);

// ---------------------------------------------------------------------------
// GPU texture cache for one pane
// ---------------------------------------------------------------------------

/// The texture currently uploaded for a pane, tagged with the state revision
/// it was built from.
#[derive(Default)]
pub struct PaneTexture {
    handle: Option<TextureHandle>,
    revision: Option<u64>,
}

impl PaneTexture {
    /// Re-upload `image` if `revision` moved since the last upload.
    pub fn sync(
        &mut self,
        ctx: &egui::Context,
        name: &str,
        image: Option<&ImageBuffer>,
        revision: u64,
    ) {
        if self.revision == Some(revision) {
            return;
        }
        self.revision = Some(revision);
        self.handle = image.map(|img| {
            log::debug!("Uploading {name} texture ({}x{})", img.width(), img.height());
            ctx.load_texture(name, img.to_color_image(), TextureOptions::LINEAR)
        });
    }

    pub fn handle(&self) -> Option<&TextureHandle> {
        self.handle.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Image pane: View menu + zoomed image
// ---------------------------------------------------------------------------

/// Render one image pane filling the current `ui`.
pub fn image_pane(
    ui: &mut Ui,
    title: &str,
    zoom: &mut ZoomState,
    zoom_step: f32,
    texture: Option<&TextureHandle>,
) {
    // Shortcuts go to whichever pane the pointer is over.
    if ui.rect_contains_pointer(ui.max_rect()) {
        handle_shortcuts(ui, zoom, zoom_step);
    }

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(title);
        ui.separator();
        ui.menu_button("View", |ui: &mut Ui| view_menu(ui, zoom, zoom_step));
        if texture.is_some() {
            ui.label(zoom.label());
        }
    });
    ui.separator();

    let Some(texture) = texture else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Open an image  (File → Open…)");
        });
        return;
    };

    let natural = texture.size_vec2();
    let available = ui.available_size();
    let scale = zoom.resolve(available, natural);
    let displayed = natural * scale;
    let image = egui::Image::from_texture(SizedTexture::new(texture.id(), displayed))
        .fit_to_exact_size(displayed);

    if zoom.fit {
        let (rect, _) = ui.allocate_exact_size(available, Sense::hover());
        let image_rect =
            Rect::from_min_size(rect.min + centered_offset(available, displayed), displayed);
        image.paint_at(ui, image_rect);
    } else {
        ScrollArea::both()
            .id_salt(title)
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                ui.add(image);
            });
    }
}

fn view_menu(ui: &mut Ui, zoom: &mut ZoomState, zoom_step: f32) {
    let ctx = ui.ctx().clone();
    let item = |label: &str, shortcut: Option<&KeyboardShortcut>| {
        let button = egui::Button::new(label);
        match shortcut {
            Some(s) => button.shortcut_text(ctx.format_shortcut(s)),
            None => button,
        }
    };

    if ui.add(item("Toggle Fit", Some(&FIT_SHORTCUT))).clicked() {
        zoom.fit_to_view();
        ui.close_menu();
    }
    if ui.add(item("Zoom In", Some(&ZOOM_IN_SHORTCUT))).clicked() {
        zoom.zoom_in(zoom_step);
        ui.close_menu();
    }
    if ui.add(item("Zoom Out", Some(&ZOOM_OUT_SHORTCUT))).clicked() {
        zoom.zoom_out(zoom_step);
        ui.close_menu();
    }
    if ui.add(item("100% Zoom", Some(&ACTUAL_SIZE_SHORTCUT))).clicked() {
        zoom.actual_size();
        ui.close_menu();
    }
}

fn handle_shortcuts(ui: &Ui, zoom: &mut ZoomState, zoom_step: f32) {
    ui.input_mut(|i| {
        if i.consume_shortcut(&FIT_SHORTCUT) {
            zoom.fit_to_view();
        }
        if i.consume_shortcut(&ACTUAL_SIZE_SHORTCUT) {
            zoom.actual_size();
        }
        if i.consume_shortcut(&ZOOM_IN_SHORTCUT) || i.consume_shortcut(&ZOOM_IN_ALT_SHORTCUT) {
            zoom.zoom_in(zoom_step);
        }
        if i.consume_shortcut(&ZOOM_OUT_SHORTCUT) {
            zoom.zoom_out(zoom_step);
        }
    });
}
