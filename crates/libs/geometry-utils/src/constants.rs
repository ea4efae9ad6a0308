use slicer_types::Micrometer;

/// Default tolerance for `Path::simplify()` (§4.1). The source this spec was
/// distilled from left this as a `Simplify(-1, -1)` sentinel; this crate
/// fixes the value, as the spec requires (Open Question OQ-2, see
/// `DESIGN.md`).
pub const DEFAULT_TOLERANCE: Micrometer = 5;

/// Consecutive vertices strictly closer than this are de-duplicated at
/// ingest (§4.2 step 1). A gap of exactly this distance is preserved (P6).
pub const NEAR_DUPLICATE_THRESHOLD: Micrometer = 100;
