use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::ViewportState;
use crate::interaction::ViewCommand;

pub type WidgetActionFn = Arc<dyn Fn(&mut ViewportState) + Send + Sync + 'static>;

/// Action bound to a key.
#[derive(Clone, Default)]
pub enum WidgetAction {
    /// Identity action; what a key without a binding resolves to.
    #[default]
    NoOp,
    Command(ViewCommand),
    Custom(WidgetActionFn),
}

/// Named identity action returned for unbound keys.
pub const NO_INTERACTION: WidgetAction = WidgetAction::NoOp;

impl WidgetAction {
    pub fn custom<F>(action: F) -> Self
    where
        F: Fn(&mut ViewportState) + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(action))
    }

    #[must_use]
    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    pub fn invoke(&self, state: &mut ViewportState) {
        match self {
            Self::NoOp => {}
            Self::Command(command) => state.apply(*command),
            Self::Custom(action) => action(state),
        }
    }
}

impl From<ViewCommand> for WidgetAction {
    fn from(command: ViewCommand) -> Self {
        Self::Command(command)
    }
}

impl fmt::Debug for WidgetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => write!(f, "WidgetAction::NoOp"),
            Self::Command(command) => write!(f, "WidgetAction::Command({command:?})"),
            Self::Custom(_) => write!(f, "WidgetAction::Custom(..)"),
        }
    }
}

/// Key identifier to action bindings, in binding order.
///
/// Binding a key twice replaces the earlier action.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: IndexMap<String, WidgetAction>,
}

impl KeyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bind(mut self, key: impl Into<String>, action: impl Into<WidgetAction>) -> Self {
        self.insert(key, action);
        self
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        action: impl Into<WidgetAction>,
    ) -> Option<WidgetAction> {
        self.bindings.insert(key.into(), action.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&WidgetAction> {
        self.bindings.get(key)
    }

    /// Bound action for `key`, or [`NO_INTERACTION`].
    #[must_use]
    pub fn lookup(&self, key: &str) -> WidgetAction {
        self.get(key).cloned().unwrap_or(NO_INTERACTION)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.bindings.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Numeric data a widget asks the rasterizer to draw over the plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    None,
    Series(Vec<f64>),
    Layers(Vec<Vec<f64>>),
}

impl Overlay {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Overlay arrays in drawing order.
    #[must_use]
    pub fn arrays(&self) -> Vec<&[f64]> {
        match self {
            Self::None => Vec::new(),
            Self::Series(values) => vec![values.as_slice()],
            Self::Layers(layers) => layers.iter().map(Vec::as_slice).collect(),
        }
    }
}

/// Pluggable unit of interactive behavior.
///
/// Widgets read the viewport to draw overlays and expose key bindings whose
/// actions mutate it. They never hold a reference to the viewport itself.
pub trait Widget {
    fn id(&self) -> &str;
    fn draw(&self, state: &ViewportState) -> Overlay;
    fn keymap(&self) -> KeyMap;
}
