//! Conversions between `slicer-types` geometry and the `clipper2-rust`
//! engine's own `Point64`/`Path64`/`Paths64`, in the style of the
//! `ToDnPoint`/`ToClipperPoint64` traits the pack's `deepnest-types` crate
//! uses to bridge its own point type and the Clipper backend.

use clipper2_rust::{Path64, Paths64, Point64};
use slicer_types::{Path, Paths, Point};

pub trait ToEnginePoint {
    fn to_engine_point(&self) -> Point64;
}

impl ToEnginePoint for Point {
    fn to_engine_point(&self) -> Point64 {
        Point64::new(self.x, self.y)
    }
}

pub trait ToEnginePath {
    fn to_engine_path(&self) -> Path64;
}

impl ToEnginePath for Path {
    fn to_engine_path(&self) -> Path64 {
        self.iter().map(ToEnginePoint::to_engine_point).collect()
    }
}

pub trait ToEnginePaths {
    fn to_engine_paths(&self) -> Paths64;
}

impl ToEnginePaths for Paths {
    fn to_engine_paths(&self) -> Paths64 {
        self.iter().map(ToEnginePath::to_engine_path).collect()
    }
}

pub trait ToSlicerPoint {
    fn to_slicer_point(&self) -> Point;
}

impl ToSlicerPoint for Point64 {
    fn to_slicer_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

pub trait ToSlicerPath {
    fn to_slicer_path(&self) -> Path;
}

impl ToSlicerPath for Path64 {
    fn to_slicer_path(&self) -> Path {
        self.iter().map(ToSlicerPoint::to_slicer_point).collect()
    }
}

pub trait ToSlicerPaths {
    fn to_slicer_paths(&self) -> Paths;
}

impl ToSlicerPaths for Paths64 {
    fn to_slicer_paths(&self) -> Paths {
        self.iter().map(ToSlicerPath::to_slicer_path).collect()
    }
}
