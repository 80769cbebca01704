//! # Manage Expense Page
//!
//! egui front for `ManageExpense`: owns the form widget state and runs the
//! screen's async handlers on the tokio runtime so the UI thread never blocks.
//!
//! The form is only on screen in the `Form` view. Once a request has settled
//! (`ManageExpense::settled_requests` moved on), the next time the form is
//! shown it is rebuilt from the screen's current props, the same as a fresh
//! mount.

use std::future::Future;
use std::sync::Arc;

use eframe::egui::{self, RichText};
use tokio::runtime::Handle;
use tracing::debug;

use super::{ActionOutcome, ManageExpense, ManageExpenseView};
use crate::ui::components::{
    show_error_overlay, show_loading_overlay, ExpenseForm, FormEvent, CURRENT_THEME,
};

pub struct ManageExpensePage {
    screen: Arc<ManageExpense>,
    form: ExpenseForm,
    runtime: Handle,
    /// `settled_requests` value the form was last built at
    form_built_at: u64,
}

impl ManageExpensePage {
    pub fn new(screen: Arc<ManageExpense>, runtime: Handle) -> Self {
        let form = ExpenseForm::new(screen.form_props());
        let form_built_at = screen.settled_requests();
        Self {
            screen,
            form,
            runtime,
            form_built_at,
        }
    }

    pub fn screen(&self) -> &Arc<ManageExpense> {
        &self.screen
    }

    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let view = self.screen.view();
        let settled = self.screen.settled_requests();
        if matches!(view, ManageExpenseView::Form { .. }) && settled != self.form_built_at {
            debug!("📝 Rebuilding expense form after request {}", settled);
            self.form = ExpenseForm::new(self.screen.form_props());
            self.form_built_at = settled;
        }

        match view {
            ManageExpenseView::Error(message) => {
                if show_error_overlay(ui, &message) {
                    self.screen.dismiss_error();
                }
            }
            ManageExpenseView::Loading => show_loading_overlay(ui),
            ManageExpenseView::Form { show_delete } => {
                if let Some(event) = self.form.show(ui) {
                    self.handle_form_event(event, ui.ctx().clone());
                }

                if show_delete {
                    ui.add_space(16.0);
                    ui.scope(|ui| {
                        ui.visuals_mut().widgets.noninteractive.bg_stroke.color =
                            CURRENT_THEME.layout.separator;
                        ui.separator();
                    });
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        let delete = egui::Button::new(
                            RichText::new("🗑").size(28.0).color(CURRENT_THEME.feedback.error),
                        )
                        .frame(false);
                        if ui.add(delete).on_hover_text("Delete expense").clicked() {
                            self.run(ui.ctx().clone(), |screen| async move {
                                screen.delete().await
                            });
                        }
                    });
                }
            }
        }
    }

    pub(crate) fn handle_form_event(&self, event: FormEvent, ctx: egui::Context) {
        match event {
            FormEvent::Cancel => self.screen.cancel(),
            FormEvent::Submit(data) => {
                self.run(ctx, |screen| async move { screen.confirm(data).await });
            }
        }
    }

    fn run<F, Fut>(&self, ctx: egui::Context, action: F)
    where
        F: FnOnce(Arc<ManageExpense>) -> Fut,
        Fut: Future<Output = ActionOutcome> + Send + 'static,
    {
        let pending = action(Arc::clone(&self.screen));
        let finished = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = pending.await;
            debug!("Manage expense action finished: {:?}", outcome);
            finished.request_repaint();
        });
        // Draw the loading view straight away
        ctx.request_repaint();
    }
}
