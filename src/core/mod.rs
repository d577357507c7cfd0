pub mod precision;
pub mod range;
pub mod types;

pub use precision::{PrecisionUnit, coarsest_exceeded, span_exceeds, whole_epoch_seconds};
pub use range::{Range, VIEW_STEP_RATIO};
pub use types::{GridSize, ViewBounds};
