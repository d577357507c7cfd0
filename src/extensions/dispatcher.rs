use std::fmt;

use smallvec::SmallVec;

use crate::error::{PlotError, PlotResult};

use super::widgets::{Widget, WidgetAction};

/// Ordered registry of widgets.
///
/// Registration order decides overlay stacking and the order in which
/// matching key actions fire. Every widget bound to a key fires; there is no
/// first-match short circuit.
#[derive(Default)]
pub struct WidgetDispatcher {
    widgets: Vec<Box<dyn Widget>>,
}

impl WidgetDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a widget. Ids must be non-empty and unique.
    pub fn register(&mut self, widget: Box<dyn Widget>) -> PlotResult<()> {
        let widget_id = widget.id().to_owned();
        if widget_id.is_empty() {
            return Err(PlotError::InvalidData(
                "widget id must not be empty".to_owned(),
            ));
        }
        if self.widgets.iter().any(|entry| entry.id() == widget_id) {
            return Err(PlotError::InvalidData(format!(
                "widget with id `{widget_id}` is already registered"
            )));
        }
        self.widgets.push(widget);
        Ok(())
    }

    /// Removes a widget by id. Returns `true` when removed.
    pub fn unregister(&mut self, widget_id: &str) -> bool {
        if let Some(position) = self
            .widgets
            .iter()
            .position(|entry| entry.id() == widget_id)
        {
            self.widgets.remove(position);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.widgets.iter().map(|widget| widget.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Widget> + '_ {
        self.widgets.iter().map(Box::as_ref)
    }

    /// One action per widget for `key`, in registration order; widgets
    /// without a binding contribute [`super::NO_INTERACTION`].
    #[must_use]
    pub fn resolve(&self, key: &str) -> SmallVec<[WidgetAction; 4]> {
        self.widgets
            .iter()
            .map(|widget| widget.keymap().lookup(key))
            .collect()
    }
}

impl fmt::Debug for WidgetDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
