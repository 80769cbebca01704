//! # App Module
//!
//! The eframe application shell. It owns the tokio runtime, the shared
//! expenses store, the backend client and the navigation stack, and each
//! frame draws whatever screen sits on top of the stack.
//!
//! ## Layout:
//! - Header: current screen title, a back button when something was pushed,
//!   and a "+" button on the tab screens
//! - Body: the current screen
//! - Footer: the "Recent" / "All" tab bar, only on tab screens
//!
//! The screens never block the UI thread; anything that talks to the backend
//! is spawned onto the runtime and asks egui for a repaint when it finishes.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use eframe::egui::{self, RichText};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::backend::{ExpenseBackend, HttpExpenseBackend};
use crate::config::AppConfig;
use crate::ui::components::{apply_theme, CURRENT_THEME};
use crate::ui::navigation::{Navigator, Route, StackNavigator};
use crate::ui::screens::{AllExpenses, ManageExpense, ManageExpensePage, RecentExpenses};
use crate::ui::state::{ExpensesStore, InMemoryExpensesStore};

const FETCH_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct ExpenseTrackerApp {
    config: AppConfig,
    runtime: Runtime,
    store: Arc<dyn ExpensesStore>,
    backend: Arc<dyn ExpenseBackend>,
    navigator: Arc<StackNavigator>,
    recent: Arc<RecentExpenses>,
    all: AllExpenses,
    /// Mounted manage screen and the route it was mounted for
    manage_page: Option<(Route, ManageExpensePage)>,
}

impl ExpenseTrackerApp {
    /// Create the app talking to the configured HTTP backend
    pub fn new(config: AppConfig) -> Result<Self> {
        let backend = HttpExpenseBackend::new(&config.backend)
            .context("Failed to create the backend client")?;
        Self::with_backend(config, Arc::new(backend))
    }

    /// Create the app over any backend and start the initial fetch
    pub fn with_backend(config: AppConfig, backend: Arc<dyn ExpenseBackend>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("expense-tracker-io")
            .enable_all()
            .build()
            .context("Failed to start the async runtime")?;

        let store: Arc<dyn ExpensesStore> = Arc::new(InMemoryExpensesStore::new());
        let navigator = Arc::new(StackNavigator::new(Route::RecentExpenses));
        let recent = Arc::new(RecentExpenses::new(
            store.clone(),
            backend.clone(),
            navigator.clone(),
        ));
        let all = AllExpenses::new(store.clone(), navigator.clone());

        info!("🚀 Expense tracker ready, backend at {}", config.backend.base_url);

        let app = Self {
            config,
            runtime,
            store,
            backend,
            navigator,
            recent,
            all,
            manage_page: None,
        };
        app.refresh_recent();
        Ok(app)
    }

    pub fn navigator(&self) -> &StackNavigator {
        &self.navigator
    }

    pub fn store(&self) -> &Arc<dyn ExpensesStore> {
        &self.store
    }

    /// Refetch everything from the backend in the background
    fn refresh_recent(&self) {
        let recent = Arc::clone(&self.recent);
        self.runtime.spawn(async move {
            let outcome = recent.load().await;
            debug!("Expense fetch finished: {:?}", outcome);
        });
    }

    /// Keep the mounted manage screen in step with the navigation stack
    fn sync_manage_page(&mut self) {
        let route = self.navigator.current_route();
        let Route::ManageExpense { expense_id } = &route else {
            if self.manage_page.take().is_some() {
                debug!("🧭 Manage expense screen closed");
            }
            return;
        };

        let already_mounted = matches!(&self.manage_page, Some((mounted, _)) if *mounted == route);
        if already_mounted {
            return;
        }

        let screen = ManageExpense::mount(
            expense_id.clone(),
            self.store.clone(),
            self.backend.clone(),
            self.navigator.clone(),
            self.config.manage_expense.clone(),
        );
        let page = ManageExpensePage::new(Arc::new(screen), self.runtime.handle().clone());
        self.manage_page = Some((route, page));
    }

    /// Draw one frame
    pub fn render(&mut self, ctx: &egui::Context) {
        self.sync_manage_page();
        let route = self.navigator.current_route();

        self.render_header(ctx, &route);
        if route.is_tab() {
            self.render_tabs(ctx, &route);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            match &route {
                Route::RecentExpenses => {
                    let today = chrono::Local::now().date_naive();
                    self.recent.show(ui, today);
                    // The fetch has no egui context to wake, so poll until it lands
                    if self.recent.screen_state().is_loading {
                        ui.ctx().request_repaint_after(FETCH_POLL_INTERVAL);
                    }
                }
                Route::AllExpenses => self.all.show(ui),
                Route::ManageExpense { .. } => {
                    if let Some((_, page)) = self.manage_page.as_mut() {
                        egui::ScrollArea::vertical().show(ui, |ui| page.show(ui));
                    }
                }
            }
        });

        // Mount the next screen before it is painted
        if self.navigator.current_route() != route {
            self.sync_manage_page();
            ctx.request_repaint();
        }
    }

    fn render_header(&self, ctx: &egui::Context, route: &Route) {
        let frame = egui::Frame::default()
            .fill(CURRENT_THEME.layout.header_background)
            .inner_margin(egui::Margin::symmetric(12.0, 10.0));

        egui::TopBottomPanel::top("header").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.navigator.depth() > 1 && ui.button("⬅").clicked() {
                    self.navigator.go_back();
                }
                ui.label(RichText::new(self.navigator.current_title()).size(20.0).strong());

                if route.is_tab() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let add = egui::Button::new(RichText::new("+").size(24.0)).frame(false);
                        if ui.add(add).on_hover_text("Add expense").clicked() {
                            self.navigator
                                .navigate(Route::ManageExpense { expense_id: None });
                        }
                    });
                }
            });
        });
    }

    fn render_tabs(&self, ctx: &egui::Context, route: &Route) {
        let frame = egui::Frame::default()
            .fill(CURRENT_THEME.layout.header_background)
            .inner_margin(egui::Margin::symmetric(12.0, 8.0));

        egui::TopBottomPanel::bottom("tabs").frame(frame).show(ctx, |ui| {
            ui.columns(2, |columns| {
                let tabs = [
                    (Route::RecentExpenses, "⏳ Recent"),
                    (Route::AllExpenses, "📅 All Expenses"),
                ];
                for (column, (tab, label)) in columns.iter_mut().zip(tabs) {
                    column.vertical_centered(|ui| {
                        let selected = *route == tab;
                        if ui.selectable_label(selected, label).clicked() && !selected {
                            self.navigator.switch_tab(tab);
                        }
                    });
                }
            });
        });
    }
}

impl eframe::App for ExpenseTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx);
        self.render(ctx);
    }
}
