//! Plants Model
//!
//! The screen's read-only cache of stored plants plus the derived reminder.

use crate::storage::Plant;

/// Plant data cached for the lifetime of the screen
#[derive(Clone, Debug)]
pub struct PlantsModel {
    /// Plants in storage order
    pub plants: Vec<Plant>,

    /// True until the initial load settles (success or failure)
    pub loading: bool,

    /// Derived reminder message for the plant due soonest
    pub next_watering: Option<String>,
}

impl PlantsModel {
    pub fn new() -> Self {
        Self {
            plants: Vec::new(),
            loading: true,
            next_watering: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }
}

impl Default for PlantsModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plants_model_starts_loading() {
        let model = PlantsModel::new();
        assert!(model.loading);
        assert!(model.is_empty());
        assert_eq!(model.len(), 0);
        assert!(model.next_watering.is_none());
    }
}
