//! Image gallery selection state.
//!
//! The gallery is the source of truth for which candidate images go into
//! the generation request. Rendering is a projection of this state; the
//! selected flags are never inferred back from markup.

use serde::{Deserialize, Serialize};

/// Number of tiles selected by default on a fresh confirmation render.
pub const DEFAULT_SELECTED_COUNT: usize = 8;

/// One selectable gallery tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Static-root-relative image path
    pub path: String,
    /// Whether the tile is currently selected
    pub selected: bool,
}

/// Ordered collection of gallery tiles.
///
/// Tile order is document order: the server-supplied images first, then
/// uploads in response-arrival order. Concurrent uploads may land out of
/// picker order; the gallery appends whatever arrives and does not re-sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    tiles: Vec<Tile>,
}

impl Gallery {
    /// Build a gallery from server-supplied image paths.
    ///
    /// The first [`DEFAULT_SELECTED_COUNT`] tiles start selected; with
    /// fewer images than that, all start selected.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tiles = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| Tile {
                path: path.into(),
                selected: i < DEFAULT_SELECTED_COUNT,
            })
            .collect();
        Self { tiles }
    }

    /// Flip the selected flag of the tile at `index`.
    ///
    /// Returns the new selected state, or `None` if the index is out of
    /// range. Toggling twice restores the original state; there is no cap
    /// on how many tiles may be selected.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let tile = self.tiles.get_mut(index)?;
        tile.selected = !tile.selected;
        Some(tile.selected)
    }

    /// Append a freshly uploaded tile. Uploaded tiles always start selected.
    pub fn append_uploaded(&mut self, path: impl Into<String>) {
        self.tiles.push(Tile {
            path: path.into(),
            selected: true,
        });
    }

    /// Paths of the selected tiles, in gallery order.
    pub fn selected_paths(&self) -> Vec<String> {
        self.tiles
            .iter()
            .filter(|t| t.selected)
            .map(|t| t.path.clone())
            .collect()
    }

    /// All tiles in order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
