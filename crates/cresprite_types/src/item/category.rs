//! Item category numbers and the sets built from them.

/// Amulets and necklaces
pub const AMULET: u16 = 1;
/// Body armor
pub const ARMOR: u16 = 2;
/// Belts and girdles
pub const BELT: u16 = 3;
/// Boots
pub const BOOTS: u16 = 4;
/// Arrows
pub const ARROWS: u16 = 5;
/// Bracers and gauntlets
pub const BRACERS: u16 = 6;
/// Helmets, hats and other headgear
pub const HELMET: u16 = 7;
/// Keys
pub const KEYS: u16 = 8;
/// Potions
pub const POTION: u16 = 9;
/// Rings
pub const RING: u16 = 10;
/// Scrolls
pub const SCROLL: u16 = 11;
/// Shields (not IWD2)
pub const SHIELD: u16 = 12;
/// Bullets
pub const BULLETS: u16 = 14;
/// Bows
pub const BOW: u16 = 15;
/// Daggers
pub const DAGGER: u16 = 16;
/// Maces
pub const MACE: u16 = 17;
/// Slings
pub const SLING: u16 = 18;
/// Small swords
pub const SMALL_SWORD: u16 = 19;
/// Large swords
pub const LARGE_SWORD: u16 = 20;
/// Hammers
pub const HAMMER: u16 = 21;
/// Morning stars
pub const MORNING_STAR: u16 = 22;
/// Flails
pub const FLAIL: u16 = 23;
/// Darts
pub const DART: u16 = 24;
/// Axes
pub const AXE: u16 = 25;
/// Quarterstaves
pub const STAFF: u16 = 26;
/// Crossbows
pub const CROSSBOW: u16 = 27;
/// Hand-to-hand weapons
pub const FIST: u16 = 28;
/// Spears
pub const SPEAR: u16 = 29;
/// Halberds
pub const HALBERD: u16 = 30;
/// Bolts
pub const BOLTS: u16 = 31;
/// Cloaks and robes
pub const CLOAK: u16 = 32;
/// Containers
pub const CONTAINER: u16 = 36;
/// Bucklers
pub const BUCKLER: u16 = 41;
/// Clubs
pub const CLUB: u16 = 44;
/// Large shields
pub const LARGE_SHIELD: u16 = 47;
/// Medium shields
pub const MEDIUM_SHIELD: u16 = 49;
/// Small shields
pub const SMALL_SHIELD: u16 = 53;
/// Great swords
pub const GREAT_SWORD: u16 = 57;
/// Leather armor (IWD2)
pub const LEATHER_ARMOR: u16 = 60;
/// Studded leather armor (IWD2)
pub const STUDDED_LEATHER_ARMOR: u16 = 61;
/// Chain mail (IWD2)
pub const CHAIN_MAIL: u16 = 62;
/// Splint mail (IWD2)
pub const SPLINT_MAIL: u16 = 63;
/// Half plate (IWD2)
pub const HALF_PLATE: u16 = 64;
/// Full plate (IWD2)
pub const FULL_PLATE: u16 = 65;
/// Hide armor (IWD2)
pub const HIDE_ARMOR: u16 = 66;
/// Robes (IWD2)
pub const ROBE: u16 = 67;
/// Bastard swords
pub const BASTARD_SWORD: u16 = 69;
/// Circlets (IWD2)
pub const CIRCLET: u16 = 72;

/// Categories that are weapons
pub const WEAPONS: &[u16] = &[
	BOW,
	DAGGER,
	MACE,
	SLING,
	SMALL_SWORD,
	LARGE_SWORD,
	HAMMER,
	MORNING_STAR,
	FLAIL,
	DART,
	AXE,
	STAFF,
	CROSSBOW,
	FIST,
	SPEAR,
	HALBERD,
	CLUB,
	GREAT_SWORD,
	BASTARD_SWORD,
];

/// Categories of launchers
pub const LAUNCHERS: &[u16] = &[BOW, CROSSBOW, SLING];

/// Categories of ranged weapons: launchers plus thrown darts
pub const RANGED_WEAPONS: &[u16] = &[BOW, CROSSBOW, SLING, DART];

/// Categories of shields
pub const SHIELDS: &[u16] = &[SHIELD, BUCKLER, LARGE_SHIELD, MEDIUM_SHIELD, SMALL_SHIELD];

/// Categories of body armor
pub const ARMORS: &[u16] = &[
	ARMOR,
	LEATHER_ARMOR,
	STUDDED_LEATHER_ARMOR,
	CHAIN_MAIL,
	SPLINT_MAIL,
	HALF_PLATE,
	FULL_PLATE,
	HIDE_ARMOR,
	ROBE,
];

/// Categories of headgear
pub const HELMETS: &[u16] = &[HELMET, CIRCLET];

/// Categories that are never worn or wielded
pub const NOT_EQUIPPABLE: &[u16] = &[ARROWS, BULLETS, BOLTS, KEYS, POTION, SCROLL, CONTAINER];
