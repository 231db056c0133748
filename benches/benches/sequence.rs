//! Benchmark suite for animation sequences
//!
//! Measures building layered sequences and advancing them frame by frame.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench sequence

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cresprite_benches::SyntheticCycles;
use cresprite_types::{
	anim::AnimationTypeId,
	layer::SpriteLayer,
	seq::{Direction, LayerSource, Sequence, build_sequence},
};

fn layers() -> Vec<LayerSource> {
	vec![
		LayerSource::new(SpriteLayer::Avatar, "CHMF"),
		LayerSource::new(SpriteLayer::Weapon, "WPMS1"),
		LayerSource::new(SpriteLayer::Shield, "WPMD1"),
		LayerSource::new(SpriteLayer::Helmet, "WPMH1"),
	]
}

/// Benchmark building every character sequence
fn bench_build(c: &mut Criterion) {
	let cycles = SyntheticCycles::character(&["CHMF", "WPMS1", "WPMD1", "WPMH1"], 12);
	let layers = layers();

	let mut group = c.benchmark_group("sequence_build");
	for sequence in [Sequence::Stand, Sequence::Walk, Sequence::AttackSlash, Sequence::Cast] {
		group.bench_with_input(BenchmarkId::from_parameter(sequence), &sequence, |b, &sequence| {
			b.iter(|| {
				black_box(build_sequence(AnimationTypeId::Character, sequence, &Direction::ALL, &layers, &cycles))
			});
		});
	}
	group.finish();
}

/// Benchmark advancing a built sequence
fn bench_advance(c: &mut Criterion) {
	let cycles = SyntheticCycles::character(&["CHMF", "WPMS1", "WPMD1", "WPMH1"], 12);
	let layers = layers();
	let Some(mut seq) = build_sequence(AnimationTypeId::Character, Sequence::Walk, &Direction::ALL, &layers, &cycles)
	else {
		eprintln!("Warning: Could not build the walk sequence");
		return;
	};

	c.bench_function("sequence_advance", |b| {
		b.iter(|| {
			seq.advance();
			black_box(&seq);
		});
	});
}

criterion_group!(benches, bench_build, bench_advance);
criterion_main!(benches);
