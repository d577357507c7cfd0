use tracing::debug;

use crate::error::PlotResult;
use crate::extensions::{Overlay, Widget};

use super::ViewportState;

impl ViewportState {
    /// Registers a widget after the ones already present.
    ///
    /// Widget ids must be non-empty and unique.
    pub fn register_widget(&mut self, widget: Box<dyn Widget>) -> PlotResult<()> {
        self.widgets.register(widget)?;
        debug!(count = self.widgets.len(), "register widget");
        Ok(())
    }

    /// Removes a widget by id. Returns `true` when removed.
    pub fn unregister_widget(&mut self, widget_id: &str) -> bool {
        let removed = self.widgets.unregister(widget_id);
        if removed {
            debug!(widget_id, "unregister widget");
        }
        removed
    }

    /// Routes one key press to every registered widget, in registration
    /// order. Unbound keys resolve to the identity action.
    ///
    /// Returns the number of non-identity actions that fired.
    pub fn dispatch(&mut self, key: &str) -> usize {
        let actions = self.widgets.resolve(key);
        let mut fired = 0;
        for action in &actions {
            if action.is_no_op() {
                continue;
            }
            action.invoke(self);
            fired += 1;
        }
        debug!(key, fired, widgets = actions.len(), "dispatch key");
        fired
    }

    /// Overlay of every widget, in registration order.
    #[must_use]
    pub fn draw_overlays(&self) -> Vec<Overlay> {
        self.widgets.iter().map(|widget| widget.draw(self)).collect()
    }
}
