use tracing::warn;

use crate::api::ViewportState;
use crate::core::Range;

use super::widgets::{KeyMap, Overlay, Widget, WidgetAction};

/// Horizontal reference line at a fixed y value.
///
/// Draws as two layers, the x endpoints then the y endpoints, spanning the
/// current x range. An optional key recenters the y range on the level while
/// keeping its span.
#[derive(Debug, Clone)]
pub struct LevelWidget {
    id: String,
    level: f64,
    center_key: Option<String>,
}

impl LevelWidget {
    #[must_use]
    pub fn new(id: impl Into<String>, level: f64) -> Self {
        Self {
            id: id.into(),
            level,
            center_key: None,
        }
    }

    #[must_use]
    pub fn with_center_key(mut self, key: impl Into<String>) -> Self {
        self.center_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl Widget for LevelWidget {
    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&self, state: &ViewportState) -> Overlay {
        let x = state.x_range();
        Overlay::Layers(vec![vec![x.min, x.max], vec![self.level, self.level]])
    }

    fn keymap(&self) -> KeyMap {
        let Some(key) = &self.center_key else {
            return KeyMap::new();
        };
        let level = self.level;
        KeyMap::new().bind(
            key.clone(),
            WidgetAction::custom(move |state: &mut ViewportState| {
                let half = state.y_range().span() / 2.0;
                if let Err(error) = state.set_y_range(Range::new(level - half, level + half)) {
                    warn!(level, error = %error, "could not center y range on level");
                }
            }),
        )
    }
}
