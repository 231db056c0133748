//! Creature inspection utility.
//!
//! Provides three subcommands:
//! - `resolve`: resolve a creature from a directory of loose resources and
//!   print its equipment, colors, translucency and animation type.
//! - `anim-type`: look up the animation type of an animation id.
//! - `sequence`: build a sequence for an animation type from a JSON manifest of
//!   per-resource frame counts.
//!
//! # Usage Examples
//!
//! ```bash
//! # Resolve IMOEN.CRE from an override directory
//! cargo run --example cre_inspect -- resolve override IMOEN --game bg2ee
//!
//! # Same, as JSON, with limits from a TOML file
//! cargo run --example cre_inspect -- resolve override IMOEN --json --config cresprite.toml
//!
//! # Which animation type does 0x1200 select in BG2:EE?
//! cargo run --example cre_inspect -- anim-type 0x1200 --game bg2ee
//!
//! # Build the walk sequence of a character from a frame manifest
//! cargo run --example cre_inspect -- sequence frames.json walk --type character --layer avatar=CHMF
//! ```

use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use config::{Config, Environment, File};
use cresprite_rs::prelude::*;
use log::info;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

	let cli = Cli::parse();
	match cli.command {
		Command::Resolve(opts) => run_resolve(opts),
		Command::AnimType(opts) => run_anim_type(opts),
		Command::Sequence(opts) => run_sequence(opts),
	}
}

#[derive(Parser)]
#[command(name = "cre_inspect")]
#[command(author = "cresprite-rs project")]
#[command(version)]
#[command(about = "Resolve and inspect Infinity Engine creature visuals", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Resolve a creature and print its visual facts
	Resolve(ResolveArgs),
	/// Look up the animation type of an animation id
	AnimType(AnimTypeArgs),
	/// Build an animation sequence from a frame manifest
	Sequence(SequenceArgs),
}

#[derive(Args)]
struct ResolveArgs {
	/// Directory of loose resources (CRE, ITM, SPL, EFF, 2DA)
	#[arg(value_name = "DIR")]
	root: PathBuf,

	/// Creature resource name
	#[arg(value_name = "CREATURE")]
	creature: String,

	/// Game the resources belong to
	#[arg(short, long, env = "CRESPRITE_GAME", default_value = "bg2")]
	game: Game,

	/// TOML file with resolver limits and table names
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Print a JSON summary instead of text
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct AnimTypeArgs {
	/// Animation id, decimal or 0x-prefixed hexadecimal
	#[arg(value_name = "ID", value_parser = parse_id)]
	id: u16,

	/// Game whose ranges apply
	#[arg(short, long, env = "CRESPRITE_GAME", default_value = "bg2")]
	game: Game,

	/// Force override ranges on or off
	#[arg(long)]
	overrides: Option<bool>,
}

#[derive(Args)]
struct SequenceArgs {
	/// JSON object mapping resource names to per-cycle frame counts
	#[arg(value_name = "MANIFEST")]
	manifest: PathBuf,

	/// Sequence to build
	#[arg(value_name = "SEQUENCE")]
	sequence: Sequence,

	/// Animation type, by section name
	#[arg(short = 't', long = "type", value_name = "TYPE", value_parser = parse_animation_type)]
	animation: AnimationTypeId,

	/// Sprite layers as LAYER=PREFIX (avatar, weapon, shield, helmet)
	#[arg(short, long = "layer", value_name = "LAYER=PREFIX", value_parser = parse_layer, required = true)]
	layers: Vec<LayerSource>,

	/// Number of ticks to advance before printing frames
	#[arg(long, default_value_t = 0)]
	ticks: usize,
}

fn parse_id(s: &str) -> Result<u16, String> {
	let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
		Some(hex) => u16::from_str_radix(hex, 16),
		None => s.parse(),
	};
	parsed.map_err(|e| format!("invalid animation id {s}: {e}"))
}

fn parse_animation_type(s: &str) -> Result<AnimationTypeId, String> {
	AnimationTypeId::ALL
		.into_iter()
		.find(|ty| ty.to_string().eq_ignore_ascii_case(s))
		.ok_or_else(|| format!("unknown animation type: {s}"))
}

fn parse_layer(s: &str) -> Result<LayerSource, String> {
	let (layer, prefix) = s.split_once('=').ok_or_else(|| format!("expected LAYER=PREFIX, got {s}"))?;
	let layer = SpriteLayer::ALL
		.into_iter()
		.find(|l| l.to_string().eq_ignore_ascii_case(layer))
		.ok_or_else(|| format!("unknown layer: {layer}"))?;
	Ok(LayerSource::new(layer, prefix.to_ascii_uppercase()))
}

fn load_config(path: Option<&PathBuf>) -> Result<ResolverConfig> {
	let mut builder = Config::builder();
	if let Some(path) = path {
		builder = builder.add_source(File::from(path.as_path()));
	}
	let config = builder
		.add_source(Environment::with_prefix("CRESPRITE").try_parsing(true))
		.build()
		.context("Failed to read resolver configuration")?;
	config.try_deserialize().context("Invalid resolver configuration")
}

fn run_resolve(args: ResolveArgs) -> Result<()> {
	if !args.root.is_dir() {
		bail!("{} is not a directory", args.root.display());
	}
	let config = load_config(args.config.as_ref())?;
	let store = DirStore::open(&args.root).with_context(|| format!("Failed to index {}", args.root.display()))?;
	let cache = ResourceCache::new();
	let resolver = Resolver::new(&store, &store, &cache, args.game).with_config(config);

	let name = ResRef::new(&args.creature)?;
	let facts = resolver.resolve_named(&name).with_context(|| format!("Failed to resolve {name}"))?;
	info!("Resolved {name} with {} effects", facts.effects().len());

	let equipment: Vec<(String, String, String)> = facts
		.equipped_items()
		.map(|(slot, item)| (slot.to_string(), item.resref.to_string(), item.appearance.clone()))
		.collect();
	let colors: Vec<Option<u8>> =
		(0..7).map(|location| facts.effective_color(SpriteLayer::Avatar, location).map(|(value, _)| value)).collect();
	let animation = facts.animation_type().map(|ty| ty.to_string());

	if args.json {
		let summary = serde_json::json!({
			"creature": name.as_str(),
			"game": args.game,
			"animation_id": format!("{:#06X}", facts.record().animation_id),
			"animation_type": animation,
			"equipment": equipment
				.iter()
				.map(|(slot, item, code)| serde_json::json!({ "slot": slot, "item": item, "appearance": code }))
				.collect::<Vec<_>>(),
			"colors": colors,
			"translucency": facts.effective_translucency(),
			"status": {
				"panicked": facts.is_panicked(),
				"stoned": facts.is_stoned(),
				"frozen": facts.is_frozen(),
				"burned": facts.is_burned(),
				"blurred": facts.is_blurred(),
			},
		});
		println!("{}", serde_json::to_string_pretty(&summary)?);
		return Ok(());
	}

	println!("{name} ({})", args.game);
	println!(
		"  animation: {:#06X} ({})",
		facts.record().animation_id,
		animation.as_deref().unwrap_or("unknown")
	);
	for (slot, item, code) in &equipment {
		println!("  {slot:<10} {item:<8} {code}");
	}
	for (location, color) in colors.iter().enumerate() {
		if let Some(color) = color {
			println!("  color {location}: {color}");
		}
	}
	println!("  translucency: {}", facts.effective_translucency());
	Ok(())
}

fn run_anim_type(args: AnimTypeArgs) -> Result<()> {
	let config = ResolverConfig {
		animation_overrides: args.overrides,
		..ResolverConfig::default()
	};
	let table = AnimationTypeTable::new(args.game, config.overrides_enabled(args.game));
	match table.type_of_id(args.id) {
		Some(ty) => println!("{:#06X} in {}: {ty}", args.id, args.game),
		None => println!("{:#06X} in {}: no animation type", args.id, args.game),
	}
	Ok(())
}

struct Manifest(HashMap<String, Vec<usize>>);

impl CycleInfo for Manifest {
	fn cycle_count(&self, resource: &ResRef) -> usize {
		self.0.get(resource.as_str()).map_or(0, Vec::len)
	}

	fn cycle_frame_count(&self, resource: &ResRef, cycle: usize) -> usize {
		self.0.get(resource.as_str()).and_then(|frames| frames.get(cycle)).copied().unwrap_or(0)
	}
}

fn run_sequence(args: SequenceArgs) -> Result<()> {
	let text =
		fs::read_to_string(&args.manifest).with_context(|| format!("Failed to read {}", args.manifest.display()))?;
	let frames: HashMap<String, Vec<usize>> = serde_json::from_str(&text).context("Invalid frame manifest")?;
	let manifest = Manifest(frames.into_iter().map(|(name, counts)| (name.to_ascii_uppercase(), counts)).collect());

	let Some(mut seq) = build_sequence(args.animation, args.sequence, &Direction::ALL, &args.layers, &manifest) else {
		bail!("{} has no {} sequence in this manifest", args.animation, args.sequence);
	};
	for _ in 0..args.ticks {
		seq.advance();
	}

	println!("{} / {}: {} directions", args.animation, args.sequence, seq.len());
	for dir in seq.directions() {
		let segments: Vec<String> = dir
			.cycle
			.segments()
			.iter()
			.map(|s| {
				let frame = s.visible_frame().map_or_else(|| "-".to_string(), |f| f.to_string());
				format!("{}:{}#{} [{}] {frame}/{}", s.layer(), s.resource(), s.cycle(), s.behavior(), s.num_frames())
			})
			.collect();
		let mirror = if dir.mirrored { " (mirrored)" } else { "" };
		println!("  {:<3}{mirror} {}", dir.direction.to_string(), segments.join("  "));
	}
	Ok(())
}
