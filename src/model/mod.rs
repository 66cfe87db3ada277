//! Pure Application Model
//!
//! Cloneable state for the screen, split into focused sub-models:
//!
//! - **PlantsModel**: the cached plant list, loading flag, reminder message
//! - **UiModel**: selection, dialogs, alerts, toast, quit flag
//!
//! All I/O lives in the store worker; everything here is side-effect free.

pub mod plants;
pub mod ui;

pub use plants::PlantsModel;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Cached plant data and the derived reminder
    pub plants: PlantsModel,

    /// UI state (selection, dialogs, toast)
    pub ui: UiModel,
}

impl Model {
    /// Create initial model: empty list, loading
    pub fn new(vim_mode: bool) -> Self {
        Self {
            plants: PlantsModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Get the currently selected plant (if any)
    pub fn selected_plant(&self) -> Option<&crate::storage::Plant> {
        self.ui
            .selected
            .and_then(|idx| self.plants.plants.get(idx))
    }

    /// Check if any modal (confirmation or alert) is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
