//! Animation playback: segments, cycles, directions and sequences.
//!
//! A [`SeqDef`] holds one [`CycleDef`] per direction. Each cycle stacks one
//! [`SegmentDef`] per sprite layer and advances them in lockstep, so that a
//! weapon overlay with fewer frames than the body never drifts out of sync.

mod build;
mod direction;
mod segment;
mod sequence;

pub use build::{CycleInfo, LayerSource, build_sequence};
pub use direction::{DirDef, Direction};
pub use segment::{Behavior, CycleDef, STOPPED, SegmentDef};
pub use sequence::{MAX_DIRECTIONS, SeqDef, Sequence};
