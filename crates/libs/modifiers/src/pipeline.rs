use slicer_types::{AttributeError, PartitionedLayer};
use tracing::debug_span;

use crate::error::{ModifierError, Result};
use crate::model::OptimizedModel;

/// A named transformer that reads and writes attributes on every layer
/// (§4.5). `init` runs once before the first layer; `modify` runs once per
/// pipeline invocation against the whole layer stack and must be
/// deterministic.
pub trait Modifier {
    fn name(&self) -> &'static str;
    fn init(&mut self, _model: &OptimizedModel) {}
    fn modify(&mut self, layers: &mut [PartitionedLayer]) -> Result<()>;
}

/// An ordered chain of modifiers. Each modifier's writes to the layer
/// attribute bag are visible to every modifier that runs after it (§5,
/// "ordering guarantees").
#[derive(Default)]
pub struct ModifierPipeline {
    modifiers: Vec<Box<dyn Modifier>>,
}

impl ModifierPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: Box<dyn Modifier>) -> &mut Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn init(&mut self, model: &OptimizedModel) {
        for modifier in &mut self.modifiers {
            modifier.init(model);
        }
    }

    pub fn run(&mut self, layers: &mut [PartitionedLayer]) -> Result<()> {
        for modifier in &mut self.modifiers {
            let _span = debug_span!("modifier", name = modifier.name()).entered();
            modifier.modify(layers)?;

            for layer in layers.iter() {
                if let Some(key) = layer.attributes.reserved_key_conflict() {
                    return Err(ModifierError::Attribute {
                        modifier: modifier.name(),
                        source: AttributeError::TypeMismatch {
                            key: key.to_string(),
                        },
                    });
                }
            }
        }
        Ok(())
    }
}
