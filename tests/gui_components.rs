// tests/gui_components.rs
//
// Headless egui frames: no window, just a Context driven by hand.
mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use common::{Canned, hello_result};
use eframe::egui;
use page_search::config::options::AppOptions;
use page_search::gui::{
    App,
    components::{
        labeled_input::{self, InputType, TextAttrs},
        result_card::{self, CardMode},
    },
    pages,
};

fn frame(ctx: &egui::Context, mut f: impl FnMut(&mut egui::Ui)) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| f(ui));
    });
}

#[test]
fn loading_card_never_calls_children() {
    let ctx = egui::Context::default();
    let mut called = 0;
    frame(&ctx, |ui| {
        result_card::show(ui, CardMode::Loading { shimmer: &[1.0, 0.83, 0.66] }, |_| called += 1);
        result_card::show(ui, CardMode::Loading { shimmer: &[] }, |_| called += 1);
        // out-of-range widths are clamped, not drawn past the card
        result_card::show(ui, CardMode::Loading { shimmer: &[2.0, -1.0, f32::NAN] }, |_| called += 1);
    });
    assert_eq!(called, 0);
}

#[test]
fn populated_card_calls_children() {
    let ctx = egui::Context::default();
    let mut called = 0;
    frame(&ctx, |ui| {
        let mode = CardMode::Populated { content: "hello world...", badge: Some("87% match") };
        result_card::show(ui, mode, |ui| {
            called += 1;
            ui.label("nested");
        });
        let no_badge = CardMode::Populated { content: "no score...", badge: None };
        result_card::show(ui, no_badge, |_| called += 1);
    });
    assert!(called >= 2);
}

#[test]
fn labeled_input_reports_nothing_without_edits() {
    let ctx = egui::Context::default();
    let value = String::from("https://example.com");
    let mut changes = Vec::new();
    frame(&ctx, |ui| {
        labeled_input::show(
            ui,
            &value,
            |v| changes.push(v),
            TextAttrs::new()
                .placeholder("Enter URL")
                .input_type(InputType::Password)
                .char_limit(200)
                .desired_width(300.0)
                .id_salt("t_url"),
        );
        labeled_input::show(ui, "", |v| changes.push(v), TextAttrs::new().enabled(false));
    });
    assert!(changes.is_empty());
    assert_eq!(value, "https://example.com");
}

fn wait_for_result(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.state.is_loading() && Instant::now() < deadline {
        app.poll();
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn app_submit_applies_background_result() {
    let ctx = egui::Context::default();
    let mut app = App::new(AppOptions::default(), Arc::new(Canned::ok(vec![hello_result()])));

    app.submit(&ctx);
    assert!(app.state.is_loading());
    frame(&ctx, |ui| pages::search::draw(ui, &mut app));

    wait_for_result(&mut app);
    assert!(!app.state.is_loading());
    assert_eq!(app.state.results().len(), 1);
    assert!(app.state.error().is_none());

    app.state.toggle_expand(0);
    frame(&ctx, |ui| pages::search::draw(ui, &mut app));
    assert!(app.state.is_expanded(0));
}

#[test]
fn page_draws_every_state() {
    let ctx = egui::Context::default();

    let mut idle = App::new(AppOptions::default(), Arc::new(Canned::ok(vec![])));
    frame(&ctx, |ui| pages::search::draw(ui, &mut idle));
    assert!(!idle.state.has_attempted());

    idle.submit(&ctx);
    wait_for_result(&mut idle);
    frame(&ctx, |ui| pages::search::draw(ui, &mut idle));
    assert!(idle.state.has_attempted());
    assert!(idle.state.results().is_empty());

    let failing = Canned::err(page_search::search::SearchError::Status(500));
    let mut broken = App::new(AppOptions::default(), Arc::new(failing));
    broken.submit(&ctx);
    wait_for_result(&mut broken);
    frame(&ctx, |ui| pages::search::draw(ui, &mut broken));
    assert_eq!(broken.state.error(), Some("Failed to fetch results"));
}
