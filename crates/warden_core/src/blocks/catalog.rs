//! Material catalog consumed while building the block table.
//!
//! The host owns the authoritative catalog; [`ClassicCatalog`] carries the
//! classic block set so tests and offline tooling can build a table without
//! a running server.

use MaterialKind::{Liquid, Passable, Solid};

/// Intrinsic material class of a block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialKind {
    /// Blocks movement (stone, cake, leaves, ...).
    Solid,
    /// Water and lava.
    Liquid,
    /// Everything else (air, saplings, torches, ...).
    Passable,
}

/// Source of intrinsic material properties, indexed by block type id.
pub trait MaterialCatalog {
    /// Material of `id`, or `None` when the catalog has no block with that id.
    fn material(&self, id: u8) -> Option<MaterialKind>;
}

/// One row of the classic catalog.
#[derive(Clone, Copy, Debug)]
struct ClassicBlock {
    name: &'static str,
    kind: MaterialKind,
}

/// Classic block set, ids 0 through 124.
const CLASSIC_BLOCKS: [ClassicBlock; 125] = [
    ClassicBlock { name: "air", kind: Passable }, // 0
    ClassicBlock { name: "stone", kind: Solid }, // 1
    ClassicBlock { name: "grass", kind: Solid }, // 2
    ClassicBlock { name: "dirt", kind: Solid }, // 3
    ClassicBlock { name: "cobblestone", kind: Solid }, // 4
    ClassicBlock { name: "planks", kind: Solid }, // 5
    ClassicBlock { name: "sapling", kind: Passable }, // 6
    ClassicBlock { name: "bedrock", kind: Solid }, // 7
    ClassicBlock { name: "water", kind: Liquid }, // 8
    ClassicBlock { name: "stationary_water", kind: Liquid }, // 9
    ClassicBlock { name: "lava", kind: Liquid }, // 10
    ClassicBlock { name: "stationary_lava", kind: Liquid }, // 11
    ClassicBlock { name: "sand", kind: Solid }, // 12
    ClassicBlock { name: "gravel", kind: Solid }, // 13
    ClassicBlock { name: "gold_ore", kind: Solid }, // 14
    ClassicBlock { name: "iron_ore", kind: Solid }, // 15
    ClassicBlock { name: "coal_ore", kind: Solid }, // 16
    ClassicBlock { name: "log", kind: Solid }, // 17
    ClassicBlock { name: "leaves", kind: Solid }, // 18
    ClassicBlock { name: "sponge", kind: Solid }, // 19
    ClassicBlock { name: "glass", kind: Solid }, // 20
    ClassicBlock { name: "lapis_ore", kind: Solid }, // 21
    ClassicBlock { name: "lapis_block", kind: Solid }, // 22
    ClassicBlock { name: "dispenser", kind: Solid }, // 23
    ClassicBlock { name: "sandstone", kind: Solid }, // 24
    ClassicBlock { name: "note_block", kind: Solid }, // 25
    ClassicBlock { name: "bed", kind: Solid }, // 26
    ClassicBlock { name: "powered_rail", kind: Passable }, // 27
    ClassicBlock { name: "detector_rail", kind: Passable }, // 28
    ClassicBlock { name: "sticky_piston", kind: Solid }, // 29
    ClassicBlock { name: "web", kind: Solid }, // 30
    ClassicBlock { name: "long_grass", kind: Passable }, // 31
    ClassicBlock { name: "dead_bush", kind: Passable }, // 32
    ClassicBlock { name: "piston", kind: Solid }, // 33
    ClassicBlock { name: "piston_extension", kind: Solid }, // 34
    ClassicBlock { name: "wool", kind: Solid }, // 35
    ClassicBlock { name: "piston_moving", kind: Solid }, // 36
    ClassicBlock { name: "yellow_flower", kind: Passable }, // 37
    ClassicBlock { name: "red_rose", kind: Passable }, // 38
    ClassicBlock { name: "brown_mushroom", kind: Passable }, // 39
    ClassicBlock { name: "red_mushroom", kind: Passable }, // 40
    ClassicBlock { name: "gold_block", kind: Solid }, // 41
    ClassicBlock { name: "iron_block", kind: Solid }, // 42
    ClassicBlock { name: "double_step", kind: Solid }, // 43
    ClassicBlock { name: "step", kind: Solid }, // 44
    ClassicBlock { name: "brick", kind: Solid }, // 45
    ClassicBlock { name: "tnt", kind: Solid }, // 46
    ClassicBlock { name: "bookshelf", kind: Solid }, // 47
    ClassicBlock { name: "mossy_cobblestone", kind: Solid }, // 48
    ClassicBlock { name: "obsidian", kind: Solid }, // 49
    ClassicBlock { name: "torch", kind: Passable }, // 50
    ClassicBlock { name: "fire", kind: Passable }, // 51
    ClassicBlock { name: "mob_spawner", kind: Solid }, // 52
    ClassicBlock { name: "wood_stairs", kind: Solid }, // 53
    ClassicBlock { name: "chest", kind: Solid }, // 54
    ClassicBlock { name: "redstone_wire", kind: Passable }, // 55
    ClassicBlock { name: "diamond_ore", kind: Solid }, // 56
    ClassicBlock { name: "diamond_block", kind: Solid }, // 57
    ClassicBlock { name: "workbench", kind: Solid }, // 58
    ClassicBlock { name: "crops", kind: Passable }, // 59
    ClassicBlock { name: "soil", kind: Solid }, // 60
    ClassicBlock { name: "furnace", kind: Solid }, // 61
    ClassicBlock { name: "burning_furnace", kind: Solid }, // 62
    ClassicBlock { name: "sign_post", kind: Solid }, // 63
    ClassicBlock { name: "wooden_door", kind: Solid }, // 64
    ClassicBlock { name: "ladder", kind: Passable }, // 65
    ClassicBlock { name: "rails", kind: Passable }, // 66
    ClassicBlock { name: "cobblestone_stairs", kind: Solid }, // 67
    ClassicBlock { name: "wall_sign", kind: Solid }, // 68
    ClassicBlock { name: "lever", kind: Passable }, // 69
    ClassicBlock { name: "stone_plate", kind: Solid }, // 70
    ClassicBlock { name: "iron_door_block", kind: Solid }, // 71
    ClassicBlock { name: "wood_plate", kind: Solid }, // 72
    ClassicBlock { name: "redstone_ore", kind: Solid }, // 73
    ClassicBlock { name: "glowing_redstone_ore", kind: Solid }, // 74
    ClassicBlock { name: "redstone_torch_off", kind: Passable }, // 75
    ClassicBlock { name: "redstone_torch_on", kind: Passable }, // 76
    ClassicBlock { name: "stone_button", kind: Passable }, // 77
    ClassicBlock { name: "snow", kind: Passable }, // 78
    ClassicBlock { name: "ice", kind: Solid }, // 79
    ClassicBlock { name: "snow_block", kind: Solid }, // 80
    ClassicBlock { name: "cactus", kind: Solid }, // 81
    ClassicBlock { name: "clay", kind: Solid }, // 82
    ClassicBlock { name: "sugar_cane_block", kind: Passable }, // 83
    ClassicBlock { name: "jukebox", kind: Solid }, // 84
    ClassicBlock { name: "fence", kind: Solid }, // 85
    ClassicBlock { name: "pumpkin", kind: Solid }, // 86
    ClassicBlock { name: "netherrack", kind: Solid }, // 87
    ClassicBlock { name: "soul_sand", kind: Solid }, // 88
    ClassicBlock { name: "glowstone", kind: Solid }, // 89
    ClassicBlock { name: "portal", kind: Passable }, // 90
    ClassicBlock { name: "jack_o_lantern", kind: Solid }, // 91
    ClassicBlock { name: "cake", kind: Solid }, // 92
    ClassicBlock { name: "diode_block_off", kind: Passable }, // 93
    ClassicBlock { name: "diode_block_on", kind: Passable }, // 94
    ClassicBlock { name: "locked_chest", kind: Solid }, // 95
    ClassicBlock { name: "trap_door", kind: Solid }, // 96
    ClassicBlock { name: "monster_eggs", kind: Solid }, // 97
    ClassicBlock { name: "smooth_brick", kind: Solid }, // 98
    ClassicBlock { name: "huge_mushroom_1", kind: Solid }, // 99
    ClassicBlock { name: "huge_mushroom_2", kind: Solid }, // 100
    ClassicBlock { name: "iron_fence", kind: Solid }, // 101
    ClassicBlock { name: "thin_glass", kind: Solid }, // 102
    ClassicBlock { name: "melon_block", kind: Solid }, // 103
    ClassicBlock { name: "pumpkin_stem", kind: Passable }, // 104
    ClassicBlock { name: "melon_stem", kind: Passable }, // 105
    ClassicBlock { name: "vine", kind: Passable }, // 106
    ClassicBlock { name: "fence_gate", kind: Solid }, // 107
    ClassicBlock { name: "brick_stairs", kind: Solid }, // 108
    ClassicBlock { name: "smooth_stairs", kind: Solid }, // 109
    ClassicBlock { name: "mycel", kind: Solid }, // 110
    ClassicBlock { name: "water_lily", kind: Passable }, // 111
    ClassicBlock { name: "nether_brick", kind: Solid }, // 112
    ClassicBlock { name: "nether_fence", kind: Solid }, // 113
    ClassicBlock { name: "nether_brick_stairs", kind: Solid }, // 114
    ClassicBlock { name: "nether_warts", kind: Passable }, // 115
    ClassicBlock { name: "enchantment_table", kind: Solid }, // 116
    ClassicBlock { name: "brewing_stand", kind: Solid }, // 117
    ClassicBlock { name: "cauldron", kind: Solid }, // 118
    ClassicBlock { name: "ender_portal", kind: Passable }, // 119
    ClassicBlock { name: "ender_portal_frame", kind: Solid }, // 120
    ClassicBlock { name: "ender_stone", kind: Solid }, // 121
    ClassicBlock { name: "dragon_egg", kind: Solid }, // 122
    ClassicBlock { name: "redstone_lamp_off", kind: Solid }, // 123
    ClassicBlock { name: "redstone_lamp_on", kind: Solid }, // 124
];

/// Built-in catalog of the classic block ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicCatalog;

impl ClassicCatalog {
    /// Lowercase name of a block id, if the catalog knows it.
    #[must_use]
    pub fn name(self, id: u8) -> Option<&'static str> {
        CLASSIC_BLOCKS.get(usize::from(id)).map(|block| block.name)
    }

    /// Number of ids the catalog knows.
    #[must_use]
    pub const fn len(self) -> usize {
        CLASSIC_BLOCKS.len()
    }

    /// Always false; the classic set is never empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        CLASSIC_BLOCKS.is_empty()
    }
}

impl MaterialCatalog for ClassicCatalog {
    fn material(&self, id: u8) -> Option<MaterialKind> {
        CLASSIC_BLOCKS.get(usize::from(id)).map(|block| block.kind)
    }
}
