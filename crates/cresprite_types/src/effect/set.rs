//! Resolved effect forests.

use cresprite_vfs::RecordStore;
use log::{debug, trace, warn};

use super::{
	Effect, EffectKind, Indirection,
	condition::{ConditionTables, EffectSubject},
	spell::SpellEffects,
};
use crate::{config::ResolverConfig, creature::ItemSlot, game::Game, layer::SpriteLayer};

/// Index of a node in an [`EffectSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EffectId(usize);

impl EffectId {
	/// Returns the node position in insertion order.
	pub const fn index(self) -> usize {
		self.0
	}
}

/// Where a root effect came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectOrigin {
	/// The creature record itself
	Creature,
	/// Global effects of the item in a slot
	Item(ItemSlot),
}

/// One resolved effect and its position in the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectNode {
	/// Payload
	pub effect: Effect,
	/// Classification for the active game
	pub kind: EffectKind,
	/// The indirection effect that pulled this one in
	pub parent: Option<EffectId>,
	/// Origin of the root of this node's tree
	pub origin: EffectOrigin,
	/// Number of indirections between the root and this node
	pub depth: usize,
}

/// A per-subject forest of resolved effects.
///
/// Root effects come from the creature record and its equipped items.
/// Indirection effects (cast spell, secondary effect, effect list) are
/// internal nodes whose children are the payload of the referenced resource.
/// Every other effect is a leaf, indexed by the layer it targets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EffectSet {
	nodes: Vec<EffectNode>,
	leaves: [Vec<EffectId>; 4],
}

impl EffectSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of nodes, internal nodes included.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns `true` if the set holds no effects.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Returns a node.
	pub fn get(&self, id: EffectId) -> Option<&EffectNode> {
		self.nodes.get(id.0)
	}

	/// Iterates over all nodes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (EffectId, &EffectNode)> {
		self.nodes.iter().enumerate().map(|(i, node)| (EffectId(i), node))
	}

	/// Iterates over the root nodes.
	pub fn roots(&self) -> impl Iterator<Item = (EffectId, &EffectNode)> {
		self.iter().filter(|(_, node)| node.parent.is_none())
	}

	/// Iterates over the direct children of a node.
	pub fn children(&self, id: EffectId) -> impl Iterator<Item = (EffectId, &EffectNode)> {
		self.iter().filter(move |(_, node)| node.parent == Some(id))
	}

	/// Iterates over the leaf effects targeting a layer, in insertion order.
	pub fn leaves(&self, layer: SpriteLayer) -> impl Iterator<Item = (EffectId, &EffectNode)> {
		self.leaves[layer.index()].iter().map(|&id| (id, &self.nodes[id.0]))
	}

	/// Iterates over the ancestors of a node, nearest first.
	pub fn ancestors(&self, id: EffectId) -> impl Iterator<Item = EffectId> + '_ {
		std::iter::successors(self.get(id).and_then(|node| node.parent), |&parent| {
			self.get(parent).and_then(|node| node.parent)
		})
	}

	/// Returns the first leaf on `layer` accepted by `predicate`.
	pub fn first_match<F>(&self, layer: SpriteLayer, mut predicate: F) -> Option<EffectId>
	where
		F: FnMut(EffectId, &EffectNode) -> bool,
	{
		self.leaves(layer).find(|(id, node)| predicate(*id, node)).map(|(id, _)| id)
	}

	/// Returns every leaf on `layer` accepted by `predicate`.
	pub fn all_matches<F>(&self, layer: SpriteLayer, mut predicate: F) -> Vec<EffectId>
	where
		F: FnMut(EffectId, &EffectNode) -> bool,
	{
		self.leaves(layer).filter(|(id, node)| predicate(*id, node)).map(|(id, _)| id).collect()
	}

	/// Returns the first leaf on `layer` with the given opcode whose color
	/// location covers `location` and that `predicate` accepts.
	///
	/// A location of `0xFF` on either side is a wildcard.
	pub fn color_by_location<F>(
		&self,
		layer: SpriteLayer,
		opcode: u16,
		location: u8,
		mut predicate: F,
	) -> Option<EffectId>
	where
		F: FnMut(EffectId, &EffectNode) -> bool,
	{
		self.first_match(layer, |id, node| {
			node.effect.opcode == opcode
				&& node.kind.color_location().is_some_and(|l| l.matches(location))
				&& predicate(id, node)
		})
	}

	/// Returns `true` if the effect and every ancestor apply to the subject.
	pub fn is_valid(&self, id: EffectId, subject: &dyn EffectSubject, tables: &ConditionTables) -> bool {
		std::iter::once(id)
			.chain(self.ancestors(id))
			.all(|id| self.get(id).is_some_and(|node| node.kind.applies_to(subject, tables)))
	}

	fn push(&mut self, node: EffectNode) -> EffectId {
		let id = EffectId(self.nodes.len());
		self.nodes.push(node);
		id
	}

	fn index_leaf(&mut self, id: EffectId, layer: SpriteLayer) {
		self.leaves[layer.index()].push(id);
	}
}

/// Adds effects to an [`EffectSet`], expanding indirections through a record
/// store.
pub struct EffectResolver<'a> {
	store: &'a dyn RecordStore,
	game: Game,
	max_depth: usize,
	max_nodes: usize,
}

impl<'a> EffectResolver<'a> {
	/// Creates a resolver reading referenced resources from `store`.
	pub fn new(store: &'a dyn RecordStore, game: Game, config: &ResolverConfig) -> Self {
		Self {
			store,
			game,
			max_depth: config.max_indirection_depth,
			max_nodes: config.max_effect_nodes,
		}
	}

	/// Adds a root effect and everything it pulls in.
	///
	/// Missing referenced resources contribute nothing. A resource already
	/// being expanded further up the chain is not expanded again. Chains
	/// deeper than the configured indirection depth, and anything past the
	/// configured node budget, are cut off.
	pub fn add(&self, set: &mut EffectSet, effect: Effect, origin: EffectOrigin) -> EffectId {
		self.add_node(set, effect, None, origin, 0)
	}

	fn add_node(
		&self,
		set: &mut EffectSet,
		effect: Effect,
		parent: Option<EffectId>,
		origin: EffectOrigin,
		depth: usize,
	) -> EffectId {
		let kind = EffectKind::classify(&effect, self.game);
		trace!("Effect opcode {} at depth {depth} classified as {kind:?}", effect.opcode);
		let indirection = kind.indirection().cloned();
		let layer = kind.layer();
		let id = set.push(EffectNode {
			effect,
			kind,
			parent,
			origin,
			depth,
		});

		let Some(source) = indirection else {
			set.index_leaf(id, layer);
			return id;
		};
		if depth >= self.max_depth {
			warn!("Indirection through {} {} exceeds depth {}, stopping", source.kind(), source.name(), self.max_depth);
			return id;
		}
		if set.ancestors(id).any(|ancestor| set.get(ancestor).and_then(|node| node.kind.indirection()) == Some(&source)) {
			debug!("{} {} references itself, not expanding again", source.kind(), source.name());
			return id;
		}
		for child in self.load_payload(&source) {
			if set.len() >= self.max_nodes {
				warn!("Effect set reached {} nodes, ignoring the rest of {} {}", self.max_nodes, source.kind(), source.name());
				break;
			}
			self.add_node(set, child, Some(id), origin, depth + 1);
		}
		id
	}

	fn load_payload(&self, source: &Indirection) -> Vec<Effect> {
		if source.name().is_empty() {
			return Vec::new();
		}
		let data = match self.store.load(source.name(), source.kind()) {
			Ok(data) => data,
			Err(e) if e.is_not_found() => {
				debug!("Referenced {} {} is missing", source.kind(), source.name());
				return Vec::new();
			}
			Err(e) => {
				warn!("Cannot load {} {}: {e}", source.kind(), source.name());
				return Vec::new();
			}
		};
		let payload = match source {
			Indirection::Spell(_) => SpellEffects::from_bytes(&data).map(SpellEffects::into_effects),
			Indirection::SecondaryEffect(_) => Effect::from_eff_bytes(&data).map(|effect| vec![effect]),
		};
		payload.unwrap_or_else(|e| {
			warn!("Skipping malformed {} {}: {e}", source.kind(), source.name());
			Vec::new()
		})
	}
}
