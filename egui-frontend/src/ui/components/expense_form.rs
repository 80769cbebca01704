//! # Expense Form
//!
//! Create/edit form for a single expense.
//!
//! ## Responsibilities:
//! - Seed the date, amount and description inputs from an existing expense
//! - Clear a field's invalid flag as soon as the user edits it
//! - Validate everything at submit time and flag exactly the failing fields
//! - Hand a typed `ExpenseData` back to the caller on success
//!
//! ## Rendering:
//! `view()` produces a plain snapshot of what should be on screen; `show()`
//! draws that snapshot with egui and reports `FormEvent`s. Both read the same
//! `ExpenseInputs`, so tests can exercise the form without a GPU.

use eframe::egui::{self, RichText};
use shared::ExpenseData;
use tracing::{debug, info};

use super::theme::CURRENT_THEME;
use crate::ui::state::{ExpenseInputs, FieldId};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input detected! Please check your entered values.";
pub const CANCEL_LABEL: &str = "Cancel";

/// What the owning screen passes in
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFormProps {
    pub form_title: String,
    pub submit_button_label: String,
    /// Present when editing an existing expense
    pub default_values: Option<ExpenseData>,
}

/// Results of user interaction with the rendered form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Cancel,
    Submit(ExpenseData),
}

/// Static configuration of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InputSpec {
    label: &'static str,
    placeholder: &'static str,
    max_length: Option<usize>,
    multiline: bool,
}

const DATE_INPUT: InputSpec = InputSpec {
    label: "Date (YYYY-MM-DD)",
    placeholder: "YYYY-MM-DD",
    max_length: Some(10),
    multiline: false,
};

const AMOUNT_INPUT: InputSpec = InputSpec {
    label: "Amount (RM)",
    placeholder: "Amount",
    max_length: None,
    multiline: false,
};

const DESCRIPTION_INPUT: InputSpec = InputSpec {
    label: "Description",
    placeholder: "Description",
    max_length: None,
    multiline: true,
};

/// One input as it should appear on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub invalid: bool,
    pub max_length: Option<usize>,
    pub multiline: bool,
}

/// Whole-form snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFormView {
    pub title: String,
    pub date: InputView,
    pub amount: InputView,
    pub description: InputView,
    /// Shown when at least one field is invalid
    pub error_banner: Option<&'static str>,
    pub cancel_label: &'static str,
    pub submit_label: String,
}

#[derive(Debug, Clone)]
pub struct ExpenseForm {
    props: ExpenseFormProps,
    inputs: ExpenseInputs,
}

impl ExpenseForm {
    pub fn new(props: ExpenseFormProps) -> Self {
        let inputs = match &props.default_values {
            Some(defaults) => ExpenseInputs::from_defaults(defaults),
            None => ExpenseInputs::empty(),
        };
        Self { props, inputs }
    }

    pub fn props(&self) -> &ExpenseFormProps {
        &self.props
    }

    pub fn inputs(&self) -> &ExpenseInputs {
        &self.inputs
    }

    /// The user typed into `field`: take the text, mark the field valid again
    pub fn input_changed(&mut self, field: FieldId, entered_value: impl Into<String>) {
        self.inputs = self.inputs.with_value(field, entered_value);
    }

    /// Validate all fields. Returns the typed record when everything passes;
    /// otherwise flags the failing fields and returns `None`.
    pub fn submit(&mut self) -> Option<ExpenseData> {
        let candidate = self.inputs.candidate();
        let report = candidate.validate();

        if !report.all_valid() {
            debug!("📝 Expense form rejected: {:?}", report);
            self.inputs = self.inputs.with_validity(report);
            return None;
        }

        let data = candidate.into_expense_data();
        if let Some(data) = &data {
            info!("📝 Expense form submitted: {} on {}", data.amount, data.date);
        }
        data
    }

    pub fn view(&self) -> ExpenseFormView {
        let input = |spec: InputSpec, field: FieldId| {
            let state = self.inputs.field(field);
            InputView {
                label: spec.label,
                placeholder: spec.placeholder,
                value: state.value.clone(),
                invalid: !state.is_valid,
                max_length: spec.max_length,
                multiline: spec.multiline,
            }
        };

        ExpenseFormView {
            title: self.props.form_title.clone(),
            date: input(DATE_INPUT, FieldId::Date),
            amount: input(AMOUNT_INPUT, FieldId::Amount),
            description: input(DESCRIPTION_INPUT, FieldId::Description),
            error_banner: self.inputs.has_error().then_some(INVALID_INPUT_MESSAGE),
            cancel_label: CANCEL_LABEL,
            submit_label: self.props.submit_button_label.clone(),
        }
    }

    /// Draw the form. Returns an event when Cancel is clicked or a submit passes validation.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<FormEvent> {
        let view = self.view();
        let mut edits: Vec<(FieldId, String)> = Vec::new();
        let mut cancel_clicked = false;
        let mut submit_clicked = false;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new(&view.title)
                    .size(24.0)
                    .strong()
                    .color(CURRENT_THEME.layout.title_text),
            );
            ui.add_space(24.0);
        });

        // Date and amount side by side
        ui.columns(2, |columns| {
            if let Some(text) = input_field(&mut columns[0], &view.date) {
                edits.push((FieldId::Date, text));
            }
            if let Some(text) = input_field(&mut columns[1], &view.amount) {
                edits.push((FieldId::Amount, text));
            }
        });

        if let Some(text) = input_field(ui, &view.description) {
            edits.push((FieldId::Description, text));
        }
        ui.add_space(24.0);

        if let Some(message) = view.error_banner {
            egui::Frame::none()
                .fill(CURRENT_THEME.feedback.error_background)
                .rounding(6.0)
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(message)
                                .strong()
                                .color(CURRENT_THEME.feedback.error),
                        );
                    });
                });
            ui.add_space(24.0);
        }

        ui.horizontal(|ui| {
            let button_size = egui::vec2(120.0, 36.0);
            cancel_clicked = ui
                .add(
                    egui::Button::new(view.cancel_label)
                        .frame(false)
                        .min_size(button_size),
                )
                .clicked();
            ui.add_space(16.0);
            submit_clicked = ui
                .add(egui::Button::new(view.submit_label.as_str()).min_size(button_size))
                .clicked();
        });

        for (field, text) in edits {
            self.input_changed(field, text);
        }

        if cancel_clicked {
            return Some(FormEvent::Cancel);
        }
        if submit_clicked {
            return self.submit().map(FormEvent::Submit);
        }
        None
    }
}

/// Labelled text input. Returns the new text when the user changed it this frame.
fn input_field(ui: &mut egui::Ui, input: &InputView) -> Option<String> {
    let (label_color, fill) = if input.invalid {
        (
            CURRENT_THEME.feedback.invalid_label,
            CURRENT_THEME.feedback.invalid_background,
        )
    } else {
        (CURRENT_THEME.inputs.label, CURRENT_THEME.inputs.background)
    };

    ui.add_space(8.0);
    ui.label(RichText::new(input.label).size(12.0).color(label_color));
    ui.add_space(4.0);

    let mut text = input.value.clone();
    let mut edit = if input.multiline {
        egui::TextEdit::multiline(&mut text).desired_rows(4)
    } else {
        egui::TextEdit::singleline(&mut text)
    };
    edit = edit
        .hint_text(input.placeholder)
        .text_color(CURRENT_THEME.inputs.text)
        .desired_width(f32::INFINITY)
        .frame(false);
    if let Some(max_length) = input.max_length {
        edit = edit.char_limit(max_length);
    }

    let response = egui::Frame::none()
        .fill(fill)
        .rounding(6.0)
        .inner_margin(6.0)
        .show(ui, |ui| ui.add(edit))
        .inner;

    response.changed().then_some(text)
}
