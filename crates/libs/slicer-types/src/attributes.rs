use std::collections::HashMap;

use crate::layer::LayerPart;
use crate::point::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The set of paths produced at one `(wall, inset)` position.
pub type InsetSlot = Vec<Path>;
/// Successive inward steps `0..count` for one disjoint sub-region.
pub type WallInsets = Vec<InsetSlot>;
/// Every wall (disjoint sub-region) produced for one `LayerPart`.
pub type PartPerimeters = Vec<WallInsets>;
/// `[part][wall][inset][Path]`, the full inset tree for a layer (§4.3).
pub type OffsetResult = Vec<PartPerimeters>;

/// Externally-visible key for the `perimeters` attribute (§3, §6).
pub const PERIMETERS_KEY: &str = "perimeters";
/// Externally-visible key for the `overlapPerimeters` attribute (§3, §6).
pub const OVERLAP_PERIMETERS_KEY: &str = "overlapPerimeters";

/// A modifier stored a value under a known key but with the wrong shape, or
/// a caller asked a generic accessor to decode an `extra` entry as a type it
/// doesn't hold. This is a programmer bug, never a user-facing condition
/// (§7, error kind 2).
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    #[error("attribute \"{key}\" could not be decoded as the requested type")]
    TypeMismatch { key: String },
}

/// The per-layer keyed attribute bag (§3). `perimeters` and
/// `overlapPerimeters` are modeled as dedicated, statically-typed fields —
/// the tagged-variant-enum design spec §9 calls out as the natural mapping
/// in a typed systems language — so a type mismatch on either is a
/// compile-time impossibility rather than a runtime error. `extra` is the
/// heterogeneous fallback for attributes future modifiers may add; unknown
/// keys placed there are preserved verbatim and round-trip through
/// `serde_json::Value`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttributeBag {
    #[serde(rename = "perimeters")]
    perimeters: Option<OffsetResult>,
    #[serde(rename = "overlapPerimeters")]
    overlap_perimeters: Option<Vec<Vec<LayerPart>>>,
    extra: HashMap<String, serde_json::Value>,
}

impl AttributeBag {
    pub fn set_perimeters(&mut self, value: OffsetResult) {
        self.perimeters = Some(value);
    }

    /// `None` means absent; present is never the wrong type, so there is no
    /// error case here (see the type note on [`AttributeBag`]).
    pub fn perimeters(&self) -> Option<&OffsetResult> {
        self.perimeters.as_ref()
    }

    /// `[part][LayerPart]`: one entry per part, holding that part's overlap
    /// regions (§3, §4.4) so a caller can index this the same way it
    /// indexes the layer's own `parts` slice.
    pub fn set_overlap_perimeters(&mut self, value: Vec<Vec<LayerPart>>) {
        self.overlap_perimeters = Some(value);
    }

    pub fn overlap_perimeters(&self) -> Option<&Vec<Vec<LayerPart>>> {
        self.overlap_perimeters.as_ref()
    }

    /// `PERIMETERS_KEY`/`OVERLAP_PERIMETERS_KEY` stay in their dedicated
    /// typed fields; writing one of them here instead would hide it from
    /// `perimeters()`/`overlap_perimeters()`, which is always a modifier
    /// bug (§7, error kind 2 — see [`AttributeBag::reserved_key_conflict`]).
    pub fn set_extra(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.extra.insert(key.into(), value);
    }

    /// `Some(key)` if a modifier wrote one of the reserved typed keys
    /// through `extra` instead of the dedicated setter. The pipeline checks
    /// this after every modifier runs and aborts if it fires.
    pub fn reserved_key_conflict(&self) -> Option<&'static str> {
        if self.extra.contains_key(PERIMETERS_KEY) {
            Some(PERIMETERS_KEY)
        } else if self.extra.contains_key(OVERLAP_PERIMETERS_KEY) {
            Some(OVERLAP_PERIMETERS_KEY)
        } else {
            None
        }
    }

    /// Decodes an `extra` entry as `T`, distinguishing "absent" (`Ok(None)`)
    /// from "present but the wrong shape" (`Err`).
    pub fn extra_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AttributeError> {
        match self.extra.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|_| AttributeError::TypeMismatch {
                    key: key.to_string(),
                }),
        }
    }
}
