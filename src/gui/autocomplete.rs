//! Parameterized autocomplete field
//!
//! One component serves both the student and the teacher field; instances
//! differ only in label, widget id, and backing suggestion source.

use std::sync::Arc;

use eframe::egui;

use crate::suggest::{SuggestFetcher, SuggestSource};

/// A text input with a remote suggestion list rendered below it
pub struct AutocompleteField {
    label: String,
    id_salt: String,
    /// Current field text
    pub value: String,
    suggestions: Vec<String>,
    fetcher: SuggestFetcher,
    max_suggestions: usize,
    last_error: Option<String>,
}

impl AutocompleteField {
    pub fn new(
        label: impl Into<String>,
        id_salt: impl Into<String>,
        source: Arc<dyn SuggestSource>,
        max_suggestions: usize,
    ) -> Self {
        let id_salt = id_salt.into();
        Self {
            label: label.into(),
            fetcher: SuggestFetcher::new(id_salt.clone(), source),
            id_salt,
            value: String::new(),
            suggestions: Vec::new(),
            max_suggestions,
            last_error: None,
        }
    }

    /// Apply completed fetches; call once per frame
    pub fn process_messages(&mut self) {
        if let Some(result) = self.fetcher.poll() {
            match result {
                Ok(names) => {
                    self.suggestions = names;
                    self.suggestions.truncate(self.max_suggestions);
                    self.last_error = None;
                }
                Err(e) => {
                    // Log-and-clear: the list never shows stale rows on failure
                    self.suggestions.clear();
                    self.last_error = Some(e.to_string());
                }
            }
        }
    }

    /// React to the user editing the field.
    ///
    /// Whitespace-only input clears the list and issues no request; anything
    /// else issues exactly one request carrying the raw value.
    pub fn edited(&mut self) {
        if self.value.trim().is_empty() {
            self.suggestions.clear();
            self.fetcher.cancel_pending();
        } else {
            self.fetcher.request(&self.value);
        }
    }

    /// Accept a suggestion: copy it into the field and empty the list
    pub fn choose(&mut self, name: &str) {
        self.value = name.to_string();
        self.suggestions.clear();
        // The chosen value supersedes whatever is still in flight
        self.fetcher.cancel_pending();
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_fetching(&self) -> bool {
        self.fetcher.is_fetching()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Render the label, input, and suggestion rows
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label(&self.label);

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.value)
                .id_salt(self.id_salt.as_str())
                .desired_width(f32::INFINITY)
                .hint_text("Type to search..."),
        );

        if response.changed() {
            self.edited();
        }

        let mut clicked: Option<String> = None;
        for name in &self.suggestions {
            if ui.selectable_label(false, name).clicked() {
                clicked = Some(name.clone());
            }
        }

        if let Some(name) = clicked {
            self.choose(&name);
        }
    }
}
