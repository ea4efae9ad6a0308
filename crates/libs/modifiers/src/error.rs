/// Errors a modifier or pipeline can surface. Geometry failures from the
/// clip engine are localized by the modifier that hit them and do not reach
/// here (§7, error kind 1); only attribute-shape bugs are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ModifierError {
    /// A modifier wrote one of the reserved typed attribute keys through
    /// `extra` instead of its dedicated setter (§7, error kind 2). Aborts
    /// the pipeline rather than silently shadowing the typed field.
    #[error("modifier \"{modifier}\" wrote a reserved attribute key: {source}")]
    Attribute {
        modifier: &'static str,
        #[source]
        source: slicer_types::AttributeError,
    },
}

pub type Result<T> = std::result::Result<T, ModifierError>;
