//! Alert banners with scheduled auto-dismissal
//!
//! Startup notices are stamped with a deadline once, by an explicit
//! `schedule_dismissal` call from the app bootstrap. The sweep is one-shot:
//! alerts pushed after scheduling keep their manual close button but are
//! never auto-dismissed.

use std::time::{Duration, Instant};

use eframe::egui;

/// Severity of an alert banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warn,
}

impl AlertLevel {
    /// Banner background fill
    fn fill(&self) -> egui::Color32 {
        match self {
            AlertLevel::Info => egui::Color32::from_rgb(28, 48, 72),
            AlertLevel::Success => egui::Color32::from_rgb(26, 58, 34),
            AlertLevel::Warn => egui::Color32::from_rgb(72, 56, 18),
        }
    }

    /// Text and border accent
    fn accent(&self) -> egui::Color32 {
        match self {
            AlertLevel::Info => egui::Color32::from_rgb(130, 180, 255),
            AlertLevel::Success => egui::Color32::from_rgb(140, 220, 150),
            AlertLevel::Warn => egui::Color32::from_rgb(240, 200, 100),
        }
    }
}

/// A single alert banner
#[derive(Debug, Clone)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    /// Deadline stamped by `schedule_dismissal`; unstamped alerts persist
    dismiss_at: Option<Instant>,
}

/// Ordered alert banners shown above the form
#[derive(Default)]
pub struct AlertBar {
    alerts: Vec<Alert>,
}

impl AlertBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alert banner
    pub fn push(&mut self, level: AlertLevel, message: impl Into<String>) {
        self.alerts.push(Alert {
            level,
            message: message.into(),
            dismiss_at: None,
        });
    }

    /// Stamp a dismissal deadline on every alert currently present.
    ///
    /// One-shot semantics: alerts pushed after this call are not covered
    /// unless the call is made again. Alerts that already carry a deadline
    /// keep the earlier one.
    pub fn schedule_dismissal(&mut self, delay: Duration, now: Instant) {
        let deadline = now + delay;
        for alert in &mut self.alerts {
            if alert.dismiss_at.is_none() {
                alert.dismiss_at = Some(deadline);
            }
        }
    }

    /// Remove stamped alerts whose deadline has passed.
    /// A no-op when nothing is stamped or nothing is due.
    pub fn sweep(&mut self, now: Instant) {
        self.alerts.retain(|a| match a.dismiss_at {
            Some(deadline) => deadline > now,
            None => true,
        });
    }

    /// Remove a single alert by position (manual close)
    pub fn dismiss(&mut self, index: usize) {
        if index < self.alerts.len() {
            self.alerts.remove(index);
        }
    }

    /// Earliest pending dismissal deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.alerts.iter().filter_map(|a| a.dismiss_at).min()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Render the banners
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut closed: Option<usize> = None;

        for (index, alert) in self.alerts.iter().enumerate() {
            egui::Frame::new()
                .fill(alert.level.fill())
                .stroke(egui::Stroke::new(1.0, alert.level.accent()))
                .corner_radius(4)
                .inner_margin(egui::Margin::symmetric(8, 6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(alert.level.accent(), &alert.message);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("\u{2715}").clicked() {
                                    closed = Some(index);
                                }
                            },
                        );
                    });
                });
            ui.add_space(4.0);
        }

        if let Some(index) = closed {
            self.dismiss(index);
        }
    }
}
