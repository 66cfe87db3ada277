//! Plant storage - the persistence collaborator for the screen
//!
//! Plants live in a single JSON file (default: ~/.local/share/plantui/plants.json).
//! The screen only ever lists plants and removes one by id; `save_plant` exists
//! for seeding and tests.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A tracked plant with its next watering reminder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: u64,
    pub name: String,
    /// Short description of the plant
    #[serde(default)]
    pub about: String,
    /// Care hint shown on the plant card
    #[serde(default)]
    pub water_tips: String,
    /// When the next watering reminder fires
    pub notification: DateTime<Utc>,
}

/// File-backed plant store
#[derive(Clone, Debug)]
pub struct PlantStore {
    path: PathBuf,
}

impl PlantStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store location: platform data dir, temp dir as fallback
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        path.push("plantui");
        path.push("plants.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List all stored plants in storage order.
    ///
    /// Fails when the store file does not exist or holds no plants - the
    /// screen treats both the same way as "no plants registered".
    pub async fn list_plants(&self) -> Result<Vec<Plant>> {
        if !self.path.exists() {
            bail!("No plants registered yet.");
        }

        let plants = self.read_plants().await?;
        if plants.is_empty() {
            bail!("No plants registered yet.");
        }

        Ok(plants)
    }

    /// Remove a plant by id. Fails if the id is unknown.
    pub async fn remove_plant(&self, id: u64) -> Result<()> {
        let plants = self.read_plants().await?;

        if !plants.iter().any(|p| p.id == id) {
            bail!("No plant with id {} in the store", id);
        }

        let remaining: Vec<Plant> = plants.into_iter().filter(|p| p.id != id).collect();
        self.write_plants(&remaining).await
    }

    /// Insert or replace a plant (matched by id), keeping storage order stable
    pub async fn save_plant(&self, plant: Plant) -> Result<()> {
        let mut plants = if self.path.exists() {
            self.read_plants().await?
        } else {
            Vec::new()
        };

        match plants.iter_mut().find(|p| p.id == plant.id) {
            Some(existing) => *existing = plant,
            None => plants.push(plant),
        }

        self.write_plants(&plants).await
    }

    async fn read_plants(&self) -> Result<Vec<Plant>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read plant store at {}", self.path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Plant store at {} is not valid JSON", self.path.display()))
    }

    async fn write_plants(&self, plants: &[Plant]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(plants)?;
        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("Failed to write plant store at {}", self.path.display()))
    }
}
