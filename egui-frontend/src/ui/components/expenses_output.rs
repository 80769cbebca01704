//! # Expenses Output
//!
//! Summary card plus list of expenses, shared by the "All" and "Recent" screens.
//!
//! ## Key Types:
//! - `ExpensesOutputView` - period label, formatted total, rows, fallback text
//! - `ExpenseItemView` - one formatted row
//!
//! `show_expenses_output` draws the view and returns the id of a clicked row.

use eframe::egui::{self, RichText};
use shared::date_utils::format_for_display;
use shared::{format_amount, total_amount, Expense, ExpenseId};

use super::theme::CURRENT_THEME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseItemView {
    pub id: ExpenseId,
    pub description: String,
    pub formatted_date: String,
    pub formatted_amount: String,
}

impl From<&Expense> for ExpenseItemView {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.clone(),
            description: expense.description.clone(),
            formatted_date: format_for_display(expense.date),
            formatted_amount: format_amount(expense.amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensesOutputView {
    pub period: String,
    pub formatted_total: String,
    pub items: Vec<ExpenseItemView>,
    /// Only set when there is nothing to list
    pub fallback_text: Option<String>,
}

impl ExpensesOutputView {
    pub fn build(expenses: &[Expense], period: &str, fallback_text: &str) -> Self {
        Self {
            period: period.to_string(),
            formatted_total: format_amount(total_amount(expenses)),
            items: expenses.iter().map(ExpenseItemView::from).collect(),
            fallback_text: expenses.is_empty().then(|| fallback_text.to_string()),
        }
    }
}

/// Draw the summary and the rows. Returns the id of the row clicked this frame.
pub fn show_expenses_output(ui: &mut egui::Ui, view: &ExpensesOutputView) -> Option<ExpenseId> {
    let mut selected = None;

    egui::Frame::none()
        .fill(CURRENT_THEME.layout.summary_background)
        .rounding(6.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&view.period)
                        .size(12.0)
                        .color(CURRENT_THEME.layout.screen_background),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&view.formatted_total)
                            .size(16.0)
                            .strong()
                            .color(CURRENT_THEME.layout.screen_background),
                    );
                });
            });
        });
    ui.add_space(12.0);

    if let Some(fallback) = &view.fallback_text {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(RichText::new(fallback).size(16.0).color(CURRENT_THEME.layout.title_text));
        });
        return None;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for item in &view.items {
            let response = egui::Frame::none()
                .fill(CURRENT_THEME.layout.item_background)
                .rounding(6.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&item.description).size(16.0).strong());
                            ui.label(
                                RichText::new(&item.formatted_date)
                                    .color(CURRENT_THEME.layout.muted_text),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(&item.formatted_amount).strong());
                        });
                    });
                })
                .response
                .interact(egui::Sense::click());

            if response.clicked() {
                selected = Some(item.id.clone());
            }
            ui.add_space(8.0);
        }
    });

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_utils::expense;

    #[test]
    fn test_build_lists_and_totals() {
        let view = ExpensesOutputView::build(
            &[expense("a", "book", 14.99), expense("b", "tea", 2.01)],
            "Total",
            "nothing here",
        );

        assert_eq!(view.period, "Total");
        assert_eq!(view.formatted_total, "RM17.00");
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].formatted_amount, "RM14.99");
        assert_eq!(view.items[1].description, "tea");
        assert!(view.fallback_text.is_none());
    }

    #[test]
    fn test_build_empty_uses_fallback() {
        let view = ExpensesOutputView::build(&[], "Total", "nothing here");

        assert_eq!(view.formatted_total, "RM0.00");
        assert!(view.items.is_empty());
        assert_eq!(view.fallback_text.as_deref(), Some("nothing here"));
    }

    #[test]
    fn test_show_renders_headless() {
        let ctx = egui::Context::default();
        let view = ExpensesOutputView::build(&[expense("a", "book", 14.99)], "Total", "none");

        let mut clicked = Some(ExpenseId::new("sentinel"));
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                clicked = show_expenses_output(ui, &view);
            });
        });

        assert!(clicked.is_none());
    }
}
