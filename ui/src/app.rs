use std::time::Duration;

use chrono::Utc;
use podium_business::{RecordsFetch, apply_loaded, load_records};
use podium_states::Time;

use crate::{state::State, widgets};

/// How often to check for the fetch result while it is in flight.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct PodiumApp {
    pub state: State,
    /// When set, `Time` is left alone so tests can drive it by hand.
    manual_time_control: bool,
}

impl PodiumApp {
    /// Called once before the first frame. Starts the dataset fetch, so a
    /// tokio runtime must be entered.
    pub fn new(mut state: State) -> Self {
        load_records(&mut state.ctx);
        Self {
            state,
            manual_time_control: false,
        }
    }

    pub fn manual_time_control(mut self, manual: bool) -> Self {
        self.manual_time_control = manual;
        self
    }
}

impl eframe::App for PodiumApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.manual_time_control {
            self.state.ctx.update::<Time>(|t| t.set(Utc::now()));
        }

        self.state.ctx.sync();
        apply_loaded(&mut self.state.ctx);
        if self.state.ctx.state::<RecordsFetch>().is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Olympic Winners");
            ui.add_space(4.0);
            widgets::athlete_panel(&mut self.state.ctx, ui);
        });
    }
}
