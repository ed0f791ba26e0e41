// src/gui/pages/search.rs
//
// The only page: URL + query inputs, search button, result cards.
// Layout reads a PageView snapshot; user events go back into app.state.

use eframe::egui::{self, Button, Color32, CornerRadius, Frame, Margin, RichText};
use egui_extras::{Size, StripBuilder};

use crate::{
    gui::{
        app::App,
        components::{
            labeled_input::{self, TextAttrs},
            result_card::{self, CardMode},
        },
    },
    search::{
        Field,
        view::{self, CardView, PageView, PopulatedCard},
    },
};

const MAX_WIDTH: f32 = 672.0;
const ROW_H: f32 = 30.0;
const BUTTON_W: f32 = 110.0;
const LINK: Color32 = Color32::from_rgb(37, 99, 235);
const ERROR: Color32 = Color32::from_rgb(220, 38, 38);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = view::project(&app.state, &app.options.view);

    egui::ScrollArea::vertical()
        .id_salt("search_page_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let side = ((ui.available_width() - MAX_WIDTH) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_max_width(MAX_WIDTH.min(ui.available_width()));
                    if search_bar(ui, app, &view) {
                        app.submit(ui.ctx());
                    }
                    ui.add_space(16.0);

                    ui.heading("Search Results");
                    ui.add_space(8.0);

                    if let Some(err) = &view.error {
                        ui.label(RichText::new(err).color(ERROR));
                        ui.add_space(8.0);
                    }

                    let mut toggled = None;
                    for card in &view.cards {
                        match card {
                            CardView::Loading { shimmer } => {
                                result_card::show(ui, CardMode::Loading { shimmer }, |_| {});
                            }
                            CardView::Populated(p) => {
                                if populated(ui, p) {
                                    toggled = Some(p.index);
                                }
                            }
                        }
                        ui.add_space(12.0);
                    }
                    if let Some(idx) = toggled {
                        app.state.toggle_expand(idx);
                    }

                    if let Some(msg) = view.empty_message {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(msg).color(Color32::GRAY));
                        });
                    }
                });
            });
        });
}

/// Inputs + button. Returns true when the user asked for a search.
fn search_bar(ui: &mut egui::Ui, app: &mut App, view: &PageView) -> bool {
    let mut submit = false;
    let searching = view.searching;
    let label = view.button_label();

    ui.allocate_ui(egui::vec2(ui.available_width(), ROW_H), |ui| {
        StripBuilder::new(ui)
            .size(Size::remainder())
            .size(Size::remainder())
            .size(Size::exact(BUTTON_W))
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    let url = s!(app.state.url());
                    let resp = labeled_input::show(
                        ui,
                        &url,
                        |v| app.state.update_field(Field::Url, v),
                        TextAttrs::new().placeholder("Enter URL").id_salt("url_input"),
                    );
                    submit |= labeled_input::submitted(ui, &resp);
                });
                strip.cell(|ui| {
                    let query = s!(app.state.query());
                    let resp = labeled_input::show(
                        ui,
                        &query,
                        |v| app.state.update_field(Field::Query, v),
                        TextAttrs::new().placeholder("Enter Query").id_salt("query_input"),
                    );
                    submit |= labeled_input::submitted(ui, &resp);
                });
                strip.cell(|ui| {
                    let button = Button::new(RichText::new(label).strong())
                        .min_size(egui::vec2(ui.available_width(), ROW_H - 4.0));
                    submit |= ui.add_enabled(!searching, button).clicked();
                });
            });
    });

    // Same rule as the disabled button: one search at a time from the UI.
    submit && !searching
}

/// Draws one result; true if its toggle was clicked.
fn populated(ui: &mut egui::Ui, card: &PopulatedCard) -> bool {
    let mut clicked = false;
    let mode = CardMode::Populated { content: &card.title, badge: card.badge.as_deref() };

    result_card::show(ui, mode, |ui| {
        let toggle = Button::new(RichText::new(card.toggle_label()).small().color(LINK)).frame(false);
        clicked = ui.add(toggle).clicked();

        if let Some(detail) = &card.detail {
            Frame::new()
                .fill(ui.visuals().faint_bg_color)
                .corner_radius(CornerRadius::same(4))
                .inner_margin(Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add(egui::Label::new(RichText::new(detail).monospace().size(11.0)).wrap());
                });
        }
    });
    clicked
}
