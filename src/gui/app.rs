// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    search::{
        HttpSearchApi, SearchApi, SearchState,
        state::Completion,
        worker::SearchWorker,
    },
};

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    let api = HttpSearchApi::new(&options.api)?;
    logf!("Init: endpoint={}", api.endpoint());

    eframe::run_native(
        "Page Search",
        native,
        Box::new(move |_cc| Ok(Box::new(App::new(options, Arc::new(api))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: SearchState,
    pub options: AppOptions,

    // network side; results come back through the worker channel
    api: Arc<dyn SearchApi>,
    worker: SearchWorker,
}

impl App {
    pub fn new(options: AppOptions, api: Arc<dyn SearchApi>) -> Self {
        Self {
            state: SearchState::new(),
            options,
            api,
            worker: SearchWorker::new(),
        }
    }

    /// Reset the page and send the request in the background.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let pending = self.state.begin_search();
        let ctx = ctx.clone();
        self.worker
            .dispatch(pending, Arc::clone(&self.api), move || ctx.request_repaint());
    }

    /// Apply every finished request. Returns how many changed the page.
    pub fn poll(&mut self) -> usize {
        self.worker
            .drain()
            .into_iter()
            .map(|(seq, outcome)| self.state.complete(seq, outcome))
            .filter(|c| *c == Completion::Applied)
            .count()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::pages::search::draw(ui, self);
        });
    }
}
