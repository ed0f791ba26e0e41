// src/gui/components/result_card.rs
//
// One search result, or a pulsing placeholder while a search is in flight.
// Stateless: expand/collapse and everything else lives with the caller.

use std::time::Duration;

use eframe::egui::{
    self, Align, Color32, CornerRadius, Frame, Layout, Margin, RichText, Sense, Ui,
};

const TITLE_BAR_H: f32 = 16.0;
const BADGE_BAR_W: f32 = 64.0;
const SHIMMER_BAR_H: f32 = 12.0;

const BADGE_FILL: Color32 = Color32::from_rgb(220, 252, 231);
const BADGE_TEXT: Color32 = Color32::from_rgb(22, 101, 52);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardMode<'a> {
    /// Placeholder. Each value is one shimmer bar's width as a fraction of the card.
    Loading { shimmer: &'a [f32] },
    Populated { content: &'a str, badge: Option<&'a str> },
}

/// `add_contents` is only called for `Populated` cards.
pub fn show(ui: &mut Ui, mode: CardMode<'_>, add_contents: impl FnOnce(&mut Ui)) -> egui::Response {
    Frame::new()
        .fill(ui.visuals().window_fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            match mode {
                CardMode::Loading { shimmer } => placeholder(ui, shimmer),
                CardMode::Populated { content, badge } => {
                    title_row(ui, content, badge);
                    add_contents(ui);
                }
            }
        })
        .response
}

fn title_row(ui: &mut Ui, content: &str, badge: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(content).strong());
        if let Some(badge) = badge {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                Frame::new()
                    .fill(BADGE_FILL)
                    .corner_radius(CornerRadius::same(4))
                    .inner_margin(Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.label(RichText::new(badge).small().strong().color(BADGE_TEXT));
                    });
            });
        }
    });
}

fn placeholder(ui: &mut Ui, shimmer: &[f32]) {
    let full = ui.available_width();

    // Slow pulse, like a CSS animate-pulse.
    let t = ui.input(|i| i.time);
    let pulse = 0.7 + 0.3 * ((t * 2.0).sin() as f32 * 0.5 + 0.5);
    ui.ctx().request_repaint_after(Duration::from_millis(33));

    let gray = Color32::from_gray(200).gamma_multiply(pulse);
    let light = Color32::from_gray(225).gamma_multiply(pulse);
    let green = BADGE_FILL.gamma_multiply(pulse);

    ui.horizontal(|ui| {
        bar(ui, full * 0.75, TITLE_BAR_H, gray);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            bar(ui, BADGE_BAR_W, TITLE_BAR_H, green);
        });
    });
    ui.add_space(4.0);

    for &w in shimmer {
        let w = if w.is_finite() { w.clamp(0.0, 1.0) } else { 0.0 };
        bar(ui, full * w, SHIMMER_BAR_H, light);
        ui.add_space(2.0);
    }
}

fn bar(ui: &mut Ui, width: f32, height: f32, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    ui.painter().rect_filled(rect, CornerRadius::same(3), color);
}
