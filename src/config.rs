use crate::core::{Board, TileLayout, TilePlacement, MARBLES_PER_PLAYER, REFERENCE_PLACEMENTS};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// A board description read from JSON.
///
/// ```json
/// {
///   "version": "1",
///   "marbles_per_player": 28,
///   "tiles": [{ "anchor": { "row": 4, "col": 0 }, "landscape": true }, ...]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub version: String,
    #[serde(default = "default_marbles")]
    pub marbles_per_player: usize,
    pub tiles: Vec<TilePlacement>,
}

fn default_marbles() -> usize {
    MARBLES_PER_PLAYER
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("reading layout file {}", path.display()))?;
        Self::from_json(&config_str)
            .with_context(|| format!("parsing layout file {}", path.display()))
    }

    /// The file at `path` if one is given, else the reference layout.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                info!(path = %path.display(), tiles = config.tiles.len(), "layout loaded");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validates the tiles and returns the shared layout.
    pub fn layout(&self) -> anyhow::Result<Arc<TileLayout>> {
        let layout = TileLayout::new(&self.tiles).context("invalid tile layout")?;
        Ok(Arc::new(layout))
    }

    /// A fresh board for this layout.
    pub fn board(&self) -> anyhow::Result<Board> {
        anyhow::ensure!(
            self.marbles_per_player > 0 && self.marbles_per_player.checked_mul(2).is_some(),
            "marbles_per_player must be positive and fit twice in usize, got {}",
            self.marbles_per_player
        );
        Ok(Board::with_layout(self.layout()?, self.marbles_per_player))
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            version: "1".to_string(),
            marbles_per_player: MARBLES_PER_PLAYER,
            tiles: REFERENCE_PLACEMENTS.to_vec(),
        }
    }
}
