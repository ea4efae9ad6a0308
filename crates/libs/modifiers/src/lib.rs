pub mod error;
pub mod model;
pub mod perimeter;
pub mod pipeline;

pub use error::{ModifierError, Result};
pub use model::OptimizedModel;
pub use perimeter::PerimeterModifier;
pub use pipeline::{Modifier, ModifierPipeline};
