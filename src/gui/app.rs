//! Main RosterBox application

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::AppConfig;
use crate::gui::alerts::{AlertBar, AlertLevel};
use crate::gui::autocomplete::AutocompleteField;
use crate::suggest::SuggestClient;

/// Main application state
pub struct RosterApp {
    /// Student name field
    student: AutocompleteField,
    /// Teacher name field
    teacher: AutocompleteField,
    /// Startup notices and late warnings
    alerts: AlertBar,
    /// Show about dialog
    show_about: bool,
    /// Status bar message
    status_message: String,
}

impl RosterApp {
    /// Create the app and schedule dismissal of the startup notices.
    ///
    /// The dismissal deadline covers exactly the alerts present here; this
    /// is the explicit bootstrap call, not an ambient load hook.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        startup_notices: Vec<(AlertLevel, String)>,
    ) -> crate::Result<Self> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let student_source = Arc::new(SuggestClient::new(&config.student_endpoint, timeout)?);
        let teacher_source = Arc::new(SuggestClient::new(&config.teacher_endpoint, timeout)?);

        let mut alerts = AlertBar::new();
        for (level, message) in startup_notices {
            alerts.push(level, message);
        }
        alerts.schedule_dismissal(Duration::from_millis(config.alert_dismiss_ms), Instant::now());

        Ok(Self {
            student: AutocompleteField::new(
                "Student name",
                "student_name",
                student_source,
                config.max_suggestions,
            ),
            teacher: AutocompleteField::new(
                "Teacher name",
                "teacher_name",
                teacher_source,
                config.max_suggestions,
            ),
            alerts,
            show_about: false,
            status_message: "Ready".to_string(),
        })
    }

    /// Process background fetch completions
    fn process_messages(&mut self) {
        self.student.process_messages();
        self.teacher.process_messages();

        if let Some(err) = self.student.last_error().or(self.teacher.last_error()) {
            self.status_message = format!("Lookup failed: {}", err);
        } else if self.student.is_fetching() || self.teacher.is_fetching() {
            self.status_message = "Searching...".to_string();
        } else {
            self.status_message = "Ready".to_string();
        }
    }

    fn copy_to_clipboard(text: &str) {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            let _ = clipboard.set_text(text);
        }
    }

    /// Render menu bar
    fn render_menu(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.button("Copy Student Name").clicked() {
                        Self::copy_to_clipboard(&self.student.value);
                        ui.close_menu();
                    }
                    if ui.button("Copy Teacher Name").clicked() {
                        Self::copy_to_clipboard(&self.teacher.value);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About RosterBox").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render status bar
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.student.is_fetching() || self.teacher.is_fetching() {
                    ui.spinner();
                }
                ui.label(&self.status_message);
            });
        });
    }

    /// Render about dialog
    fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if self.show_about {
            egui::Window::new("About RosterBox")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("RosterBox");
                        ui.label(format!("Version {}", crate::VERSION));
                        ui.add_space(10.0);
                        ui.label("Autocomplete front-end for roster search services");
                        ui.add_space(10.0);
                        if ui.button("OK").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.process_messages();

        let now = Instant::now();
        self.alerts.sweep(now);

        self.render_menu(ctx, frame);
        self.render_status_bar(ctx);
        self.render_about_dialog(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.alerts.ui(ui);
            if !self.alerts.is_empty() {
                ui.add_space(8.0);
            }

            ui.heading("Roster lookup");
            ui.add_space(8.0);

            self.student.ui(ui);
            ui.add_space(12.0);
            self.teacher.ui(ui);
        });

        if self.student.is_fetching() || self.teacher.is_fetching() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.alerts.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
