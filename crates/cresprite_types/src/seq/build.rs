use cresprite_vfs::ResRef;
use log::debug;

use super::{Behavior, CycleDef, DirDef, Direction, SegmentDef, SeqDef, Sequence};
use crate::{anim::AnimationTypeId, layer::SpriteLayer};

/// Cycle and frame counts of animation resources.
pub trait CycleInfo {
	/// Returns the number of cycles in a resource; 0 if it does not exist.
	fn cycle_count(&self, resource: &ResRef) -> usize;

	/// Returns the number of frames in a cycle.
	fn cycle_frame_count(&self, resource: &ResRef, cycle: usize) -> usize;
}

/// Resource prefix and behavior of one sprite layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSource {
	/// Layer
	pub layer: SpriteLayer,
	/// Resource name prefix; the sequence's suffix is appended
	pub prefix: String,
	/// Behavior replacing the sequence default
	pub behavior: Option<Behavior>,
}

impl LayerSource {
	/// Creates a layer source with the sequence's default behavior.
	pub fn new(layer: SpriteLayer, prefix: impl Into<String>) -> Self {
		Self {
			layer,
			prefix: prefix.into(),
			behavior: None,
		}
	}

	/// Overrides the behavior.
	pub fn with_behavior(mut self, behavior: Behavior) -> Self {
		self.behavior = Some(behavior);
		self
	}
}

/// Builds the playback definition of a sequence.
///
/// Each requested direction gets a cycle with one segment per layer whose
/// resource has the needed cycle. Eastern directions reuse the mirrored
/// western cycle when the animation stores fewer than sixteen directions.
///
/// Returns `None` if the animation type lacks the sequence or no direction
/// could be built.
pub fn build_sequence(
	animation: AnimationTypeId,
	sequence: Sequence,
	directions: &[Direction],
	layers: &[LayerSource],
	info: &dyn CycleInfo,
) -> Option<SeqDef> {
	let layout = animation.sequence_layout();
	let Some(entry) = layout.entry(sequence) else {
		debug!("Animation type {animation} has no {sequence} sequence");
		return None;
	};

	let resources: Vec<(&LayerSource, ResRef)> = layers
		.iter()
		.filter_map(|source| match ResRef::new(&format!("{}{}", source.prefix, entry.suffix)) {
			Ok(name) => Some((source, name)),
			Err(e) => {
				debug!("Skipping {} layer: {e}", source.layer);
				None
			}
		})
		.collect();

	let mut seq = SeqDef::new(sequence);
	for &direction in directions {
		let (offset, mirrored) = layout.directions.locate(direction);
		let cycle_index = entry.base_cycle + offset;

		let mut cycle = CycleDef::default();
		for (source, resource) in &resources {
			if cycle_index >= info.cycle_count(resource) {
				debug!("{resource} has no cycle {cycle_index}");
				continue;
			}
			let behavior = source.behavior.unwrap_or_else(|| sequence.default_behavior());
			let frames = info.cycle_frame_count(resource, cycle_index);
			cycle.add_segment(SegmentDef::new(resource.clone(), cycle_index, source.layer, behavior, frames));
		}
		if !cycle.is_empty() {
			seq.add_direction(DirDef::new(direction, mirrored, cycle));
		}
	}
	(!seq.is_empty()).then_some(seq)
}
