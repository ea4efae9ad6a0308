/// Errors the clip engine can report. All of these are the §7 "geometry
/// failure" kind: non-fatal to the pipeline, localized to the operation that
/// raised them.
#[derive(Debug, thiserror::Error)]
pub enum ClipperError {
    #[error("the polygon union engine could not compute a result")]
    UnionFailed,
    #[error("the offset engine could not compute a result")]
    OffsetFailed,
    #[error("the infill clip engine could not compute a result")]
    ClipFailed,
}

pub type Result<T> = std::result::Result<T, ClipperError>;
