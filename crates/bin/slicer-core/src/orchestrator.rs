use clipper_core::partition;
use modifiers::{ModifierPipeline, OptimizedModel, PerimeterModifier};
use rayon::prelude::*;
use slicer_types::{paths_size, Layer, Micrometer, PartitionedLayer, Point, SliceConfig};
use tracing::warn;

/// Partitions every raw layer, optionally spreading the work across a
/// `rayon` pool. Each call to `partition` builds its own clip engine
/// instance, so layers may be partitioned concurrently without sharing
/// engine state (§5). A layer whose partitioner reports a geometry failure
/// is logged and becomes an empty `PartitionedLayer` rather than aborting
/// the run (§7, error kind 1).
fn partition_all(layers: &[Layer], parallel: bool) -> Vec<PartitionedLayer> {
    let partition_one = |(index, layer): (usize, &Layer)| match partition(layer) {
        Ok(parts) => PartitionedLayer::new(parts),
        Err(err) => {
            warn!(layer = index, %err, "orchestrator: skipping layer after a partition failure");
            PartitionedLayer::new(Vec::new())
        }
    };

    if parallel {
        layers.par_iter().enumerate().map(partition_one).collect()
    } else {
        layers.iter().enumerate().map(partition_one).collect()
    }
}

/// A read-only summary of the whole input stack, standing in for the mesh
/// metadata a real STL loader would supply to `Modifier::init` (§4.5).
fn summarize(layers: &[Layer], layer_height: Micrometer) -> OptimizedModel {
    let bbox = layers.iter().filter_map(|layer| paths_size(layer)).reduce(
        |(min_a, max_a), (min_b, max_b)| {
            (
                Point::new(min_a.x.min(min_b.x), min_a.y.min(min_b.y)),
                Point::new(max_a.x.max(max_b.x), max_a.y.max(max_b.y)),
            )
        },
    );
    let (build_volume_min, build_volume_max) = bbox.unwrap_or_default();
    OptimizedModel {
        build_volume_min,
        build_volume_max,
        layer_height,
    }
}

/// Runs the whole §5 pipeline: partition every layer, then apply the
/// modifier chain. The layer stack's input index order is preserved
/// regardless of how partitioning was parallelized.
pub fn run(
    layers: &[Layer],
    config: SliceConfig,
    layer_height: Micrometer,
    parallel: bool,
) -> anyhow::Result<Vec<PartitionedLayer>> {
    let model = summarize(layers, layer_height);
    let mut partitioned = partition_all(layers, parallel);

    let mut pipeline = ModifierPipeline::new();
    pipeline.push(Box::new(PerimeterModifier::new(config)));
    pipeline.init(&model);
    pipeline.run(&mut partitioned)?;

    Ok(partitioned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicer_types::Point;

    fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Layer {
        vec![vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]]
    }

    fn config() -> SliceConfig {
        SliceConfig {
            extrusion_width: 400,
            inset_count: 2,
            infill_overlap_pct: 50,
        }
    }

    #[test]
    fn sequential_and_parallel_runs_agree() {
        let layers = vec![square(0, 0, 10_000, 10_000), square(0, 0, 1_000, 1_000)];
        let sequential = run(&layers, config(), 200, false).unwrap();
        let parallel = run(&layers, config(), 200, true).unwrap();
        assert_eq!(sequential.len(), parallel.len());
        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.parts.len(), b.parts.len());
        }
    }

    #[test]
    fn preserves_input_layer_order() {
        let layers = vec![
            square(0, 0, 1_000, 1_000),
            square(0, 0, 5_000, 5_000),
            square(0, 0, 9_000, 9_000),
        ];
        let result = run(&layers, config(), 200, true).unwrap();
        for (layer, partitioned) in layers.iter().zip(result.iter()) {
            let input_bbox = paths_size(layer).unwrap();
            let output_bbox = paths_size(&[partitioned.parts[0].outline().clone()]).unwrap();
            assert_eq!(input_bbox, output_bbox, "layer order was not preserved");
        }
    }
}
