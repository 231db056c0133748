//! Benchmark suite for creature resolution
//!
//! Measures how resolution scales with the number of item effects and the depth
//! of spell indirection chains, with a cold and a warm item cache.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench resolve

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cresprite_benches::equipped_creature_store;
use cresprite_types::{
	cache::ResourceCache,
	creature::Resolver,
	game::Game,
	layer::SpriteLayer,
	palette::{Palette, TintOp, tint_colors},
};
use cresprite_vfs::ResRef;

/// Benchmark resolution with a warm cache, varying item effects
fn bench_resolve_warm(c: &mut Criterion) {
	let mut group = c.benchmark_group("resolve_warm");
	let name = ResRef::new("BENCH").unwrap();

	for effects in [0, 4, 16] {
		let store = equipped_creature_store(effects, 2);
		let cache = ResourceCache::new();
		let resolver = Resolver::new(&store, &store, &cache, Game::Bg2);
		resolver.resolve_named(&name).unwrap();

		group.throughput(Throughput::Elements((effects * 10) as u64));
		group.bench_with_input(BenchmarkId::new("item_effects", effects), &name, |b, name| {
			b.iter(|| black_box(resolver.resolve_named(black_box(name))));
		});
	}

	group.finish();
}

/// Benchmark resolution with a cold cache
fn bench_resolve_cold(c: &mut Criterion) {
	let store = equipped_creature_store(4, 2);
	let name = ResRef::new("BENCH").unwrap();

	c.bench_function("resolve_cold", |b| {
		b.iter(|| {
			let cache = ResourceCache::new();
			let resolver = Resolver::new(&store, &store, &cache, Game::Bg2);
			black_box(resolver.resolve_named(&name))
		});
	});
}

/// Benchmark indirection chain expansion
fn bench_indirection_depth(c: &mut Criterion) {
	let mut group = c.benchmark_group("indirection_depth");
	let name = ResRef::new("BENCH").unwrap();

	for depth in [1, 4, 8] {
		let store = equipped_creature_store(0, depth);
		let cache = ResourceCache::new();
		let resolver = Resolver::new(&store, &store, &cache, Game::Bg2Ee);
		group.bench_with_input(BenchmarkId::from_parameter(depth), &name, |b, name| {
			b.iter(|| black_box(resolver.resolve_named(name)));
		});
	}

	group.finish();
}

/// Benchmark fact queries on a resolved creature
fn bench_fact_queries(c: &mut Criterion) {
	let store = equipped_creature_store(16, 4);
	let cache = ResourceCache::new();
	let resolver = Resolver::new(&store, &store, &cache, Game::Bg2);
	let facts = resolver.resolve_named(&ResRef::new("BENCH").unwrap()).unwrap();

	let mut group = c.benchmark_group("fact_queries");
	group.bench_function("effective_color", |b| {
		b.iter(|| {
			for location in 0..7 {
				black_box(facts.effective_color(SpriteLayer::Avatar, black_box(location)));
			}
		});
	});
	group.bench_function("effective_translucency", |b| {
		b.iter(|| black_box(facts.effective_translucency()));
	});
	group.finish();
}

/// Benchmark palette tinting
fn bench_tint(c: &mut Criterion) {
	let mut group = c.benchmark_group("tint");
	let palette = Palette::grayscale();

	for op in [TintOp::Glow, TintOp::Solid, TintOp::Bright] {
		group.bench_with_input(BenchmarkId::from_parameter(format!("{op:?}")), &op, |b, &op| {
			b.iter(|| black_box(tint_colors(&palette, 4, 12 * 7, op, black_box(0x00C0_4020))));
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_resolve_warm,
	bench_resolve_cold,
	bench_indirection_depth,
	bench_fact_queries,
	bench_tint
);
criterion_main!(benches);
