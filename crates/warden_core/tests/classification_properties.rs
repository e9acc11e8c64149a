//! # Classification Properties
//!
//! Quantified properties of the block table, footprint borders and
//! geometric predicates.
//!
//! Run with: cargo test --package warden_core --test classification_properties

use proptest::prelude::*;
use warden_core::{
    aim_deviation, lower_border, reach_deviation, upper_border, BlockTypeTable, CapabilityMask,
    ChunkedWorld, ClassicCatalog, LocationEvaluator, MaterialCatalog, MaterialKind,
};
use warden_shared::{block_ids, TargetBox, Vec3};

/// Catalog that knows every id, with a kind derived from the id.
struct StripedCatalog;

impl MaterialCatalog for StripedCatalog {
    fn material(&self, id: u8) -> Option<MaterialKind> {
        match id % 4 {
            0 => Some(MaterialKind::Solid),
            1 => Some(MaterialKind::Liquid),
            2 => Some(MaterialKind::Passable),
            _ => None,
        }
    }
}

fn composites_carry_base_bits(mask: CapabilityMask) -> bool {
    let both = CapabilityMask::NONSOLID | CapabilityMask::SOLID;
    (!mask.contains(CapabilityMask::from_bits(0x004)) || mask.contains(CapabilityMask::NONSOLID))
        && (!mask.contains(CapabilityMask::from_bits(0x008)) || mask.contains(both))
        && (!mask.contains(CapabilityMask::from_bits(0x010)) || mask.contains(both))
        && (!mask.contains(CapabilityMask::from_bits(0x020)) || mask.contains(both))
        && (!mask.contains(CapabilityMask::from_bits(0x040)) || mask.contains(CapabilityMask::NONSOLID))
}

#[test]
fn every_table_entry_is_well_formed() {
    for table in [
        BlockTypeTable::build(&ClassicCatalog),
        BlockTypeTable::build(&StripedCatalog),
    ] {
        for id in 0..=255u32 {
            let mask = table.classify(id).expect("id in range");
            assert!(mask.is_solid() || mask.is_nonsolid(), "id {id}");
            assert!(composites_carry_base_bits(mask), "id {id}");
            assert!(!mask.is_in_ground() && !mask.is_on_ground(), "id {id}");
        }
    }
}

#[test]
fn overrides_beat_any_catalog() {
    let table = BlockTypeTable::build(&StripedCatalog);
    // 65 % 4 == 1 would be liquid, 85 % 4 == 1 as well.
    assert_eq!(table.classify(u32::from(block_ids::LADDER)), Ok(CapabilityMask::LADDER));
    assert_eq!(table.classify(u32::from(block_ids::FENCE)), Ok(CapabilityMask::FENCE));
    assert_eq!(table.classify(u32::from(block_ids::AIR)), Ok(CapabilityMask::NONSOLID));
}

proptest! {
    #[test]
    fn borders_bracket_the_coordinate(d in -30_000_000.0f64..30_000_000.0) {
        let lower = f64::from(lower_border(d));
        let upper = f64::from(upper_border(d));
        prop_assert!(lower <= d);
        prop_assert!(d < upper + 1.0);
        prop_assert!(lower <= upper);
        prop_assert!(upper - lower <= 1.0);
    }

    #[test]
    fn ids_past_the_table_are_rejected(id in 256u32..) {
        let table = BlockTypeTable::build(&ClassicCatalog);
        prop_assert!(table.classify(id).is_err());
    }

    #[test]
    fn reach_is_excess_distance(
        x in -10.0f64..10.0,
        y in -10.0f64..10.0,
        z in -10.0f64..10.0,
        limit in 0.0f64..8.0,
    ) {
        let eye = Vec3::ZERO;
        let target = Vec3::new(x, y, z);
        let distance = target.length();
        let deviation = reach_deviation(eye, target, limit);
        if distance <= limit {
            prop_assert_eq!(deviation, 0.0);
        } else {
            prop_assert!((deviation - (distance - limit)).abs() < 1e-9);
        }
    }

    #[test]
    fn aim_deviation_grows_with_rotation(
        distance in 1.0f64..20.0,
        a in 0.0f64..std::f64::consts::FRAC_PI_2,
        b in 0.0f64..std::f64::consts::FRAC_PI_2,
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let eye = Vec3::new(0.0, 65.0, 0.0);
        let target = TargetBox::new(Vec3::new(distance, 65.0, 0.0), 0.6, 1.8);
        let view = |angle: f64| Vec3::new(angle.cos(), 0.0, angle.sin());

        let near = aim_deviation(eye, view(small), &target, 0.1);
        let far = aim_deviation(eye, view(large), &target, 0.1);
        prop_assert!(near >= 0.0);
        prop_assert!(far + 1e-9 >= near);
    }

    #[test]
    fn evaluation_is_idempotent(
        x in -6.0f64..6.0,
        y in 58.0f64..66.0,
        z in -6.0f64..6.0,
    ) {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut world = ChunkedWorld::new();
        world.fill((-4, 60, -4), (4, 60, 4), block_ids::STONE, 0).unwrap();
        world.fill((-4, 61, -4), (0, 62, 4), block_ids::WATER, 3).unwrap();
        world.fill((1, 61, 1), (1, 63, 1), block_ids::FENCE, 0).unwrap();
        let evaluator = LocationEvaluator::new(&table);
        let point = Vec3::new(x, y, z);

        prop_assert_eq!(evaluator.evaluate(&world, point), evaluator.evaluate(&world, point));
    }
}
