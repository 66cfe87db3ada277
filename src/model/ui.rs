//! UI Model
//!
//! Selection, dialogs, alerts and visual state for the screen.

use std::time::Instant;

/// How long a toast stays on screen
const TOAST_DURATION_MS: u128 = 1500;

/// UI state: selection, dialogs, popups
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Index of the highlighted plant card
    pub selected: Option<usize>,

    /// Remove confirmation dialog: (plant id, plant name)
    pub confirm_remove: Option<(u64, String)>,

    /// Blocking alert message (load failure, removal failure)
    pub alert: Option<String>,

    /// How many alerts have been raised (inspected by tests)
    pub alerts_shown: u32,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether vim keybindings (j/k) are enabled
    pub vim_mode: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            selected: None,
            confirm_remove: None,
            alert: None,
            alerts_shown: 0,
            toast_message: None,
            vim_mode,
            should_quit: false,
        }
    }

    /// Check if any modal is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm_remove.is_some() || self.alert.is_some()
    }

    /// Raise a blocking alert
    pub fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
        self.alerts_shown += 1;
    }

    /// Dismiss the current alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if the toast has been visible long enough to auto-dismiss
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => timestamp.elapsed().as_millis() >= TOAST_DURATION_MS,
            None => false,
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert!(model.selected.is_none());
        assert!(!model.has_modal());
        assert_eq!(model.alerts_shown, 0);
    }

    #[test]
    fn test_alert_lifecycle() {
        let mut model = UiModel::new(false);

        model.show_alert("No plants registered yet.".to_string());
        assert!(model.has_modal());
        assert_eq!(model.alerts_shown, 1);

        model.dismiss_alert();
        assert!(!model.has_modal());
        // Counter keeps the history even after dismissal
        assert_eq!(model.alerts_shown, 1);
    }

    #[test]
    fn test_confirm_remove_is_modal() {
        let mut model = UiModel::new(false);
        model.confirm_remove = Some((3, "Cactus".to_string()));
        assert!(model.has_modal());

        model.confirm_remove = None;
        assert!(!model.has_modal());
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        assert!(model.toast_message.is_none());
        assert!(!model.should_dismiss_toast());

        model.show_toast("Fern removed".to_string());
        assert!(model.toast_message.is_some());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
