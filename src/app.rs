use eframe::egui;

use crate::state::AppState;
use crate::ui::pane::{image_pane, PaneTexture};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PhotoFilterApp {
    pub state: AppState,
    input_texture: PaneTexture,
    output_texture: PaneTexture,
}

impl PhotoFilterApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            input_texture: PaneTexture::default(),
            output_texture: PaneTexture::default(),
        }
    }
}

impl eframe::App for PhotoFilterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Background dialog + shortcuts ----
        self.state.poll_dialog();
        panels::handle_shortcuts(ctx, &mut self.state);

        // ---- Textures follow the buffers ----
        self.input_texture.sync(
            ctx,
            "input",
            self.state.source.as_ref(),
            self.state.input_revision,
        );
        self.output_texture.sync(
            ctx,
            "output",
            self.state.output.as_ref(),
            self.state.output_revision,
        );

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        let zoom_step = self.state.config.zoom_step;

        // ---- Left half: input image ----
        egui::SidePanel::left("input_pane")
            .default_width(ctx.screen_rect().width() / 2.0)
            .resizable(true)
            .show(ctx, |ui| {
                image_pane(
                    ui,
                    "Input",
                    &mut self.state.input_zoom,
                    zoom_step,
                    self.input_texture.handle(),
                );
            });

        // ---- Remaining space: filter output ----
        egui::CentralPanel::default().show(ctx, |ui| {
            image_pane(
                ui,
                "Output",
                &mut self.state.output_zoom,
                zoom_step,
                self.output_texture.handle(),
            );
        });
    }
}
