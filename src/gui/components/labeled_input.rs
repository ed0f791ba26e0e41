// src/gui/components/labeled_input.rs
//
// Controlled single-line text field. The caller owns the value; this widget
// only reports edits through `on_change`. Attributes are passed straight to
// egui's TextEdit without interpretation.

use eframe::egui::{self, TextEdit};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Password,
}

#[derive(Clone, Debug)]
pub struct TextAttrs<'a> {
    pub input_type: InputType,
    pub placeholder: Option<&'a str>,
    pub char_limit: Option<usize>,
    /// `None` = fill the available width
    pub desired_width: Option<f32>,
    pub enabled: bool,
    pub id_salt: Option<&'a str>,
}

impl Default for TextAttrs<'_> {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            placeholder: None,
            char_limit: None,
            desired_width: None,
            enabled: true,
            id_salt: None,
        }
    }
}

impl<'a> TextAttrs<'a> {
    pub fn new() -> Self { Self::default() }
    pub fn input_type(mut self, t: InputType) -> Self { self.input_type = t; self }
    pub fn placeholder(mut self, p: &'a str) -> Self { self.placeholder = Some(p); self }
    pub fn char_limit(mut self, n: usize) -> Self { self.char_limit = Some(n); self }
    pub fn desired_width(mut self, w: f32) -> Self { self.desired_width = Some(w); self }
    pub fn enabled(mut self, on: bool) -> Self { self.enabled = on; self }
    pub fn id_salt(mut self, id: &'a str) -> Self { self.id_salt = Some(id); self }
}

pub fn show<F>(ui: &mut egui::Ui, value: &str, on_change: F, attrs: TextAttrs<'_>) -> egui::Response
where
    F: FnOnce(String),
{
    // Scratch copy: TextEdit wants `&mut String`, the caller keeps the real one.
    let mut buf = s!(value);

    let mut edit = TextEdit::singleline(&mut buf)
        .password(attrs.input_type == InputType::Password)
        .desired_width(attrs.desired_width.unwrap_or(f32::INFINITY));
    if let Some(p) = attrs.placeholder {
        edit = edit.hint_text(p);
    }
    if let Some(n) = attrs.char_limit {
        edit = edit.char_limit(n);
    }
    if let Some(id) = attrs.id_salt {
        edit = edit.id_salt(id);
    }

    let resp = ui.add_enabled(attrs.enabled, edit);
    if resp.changed() {
        on_change(buf);
    }
    resp
}

/// Enter pressed while this field had focus.
pub fn submitted(ui: &egui::Ui, resp: &egui::Response) -> bool {
    resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
