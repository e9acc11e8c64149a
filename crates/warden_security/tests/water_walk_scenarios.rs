//! End-to-end water-walk scenarios through the `Warden` dispatcher.

use warden_core::{BlockTypeTable, ChunkedWorld, ClassicCatalog};
use warden_security::{CheckType, NoBypass, RecordingSink, Verdict, Warden, WardenConfig};
use warden_shared::{block_ids, HostEvent, PlayerId, Vec3};

const STEVE: PlayerId = PlayerId(1);

/// Still water from y=60 to y=62 over stone, 9x9 around the origin.
fn lake() -> ChunkedWorld {
    let mut world = ChunkedWorld::new();
    world.fill((-4, 59, -4), (4, 59, 4), block_ids::STONE, 0).unwrap();
    world.fill((-4, 60, -4), (4, 62, 4), block_ids::STATIONARY_WATER, 0).unwrap();
    world
}

fn moved(from: Vec3, to: Vec3) -> HostEvent {
    HostEvent::Move { player: STEVE, world: "world".into(), from, to }
}

fn run(world: &ChunkedWorld, events: &[HostEvent]) -> (Vec<Verdict>, Warden<'static>) {
    // Leaked so the engine can outlive this helper in assertions.
    let table: &'static BlockTypeTable = Box::leak(Box::new(BlockTypeTable::build(&ClassicCatalog)));
    let mut warden = Warden::new(WardenConfig::default(), table).unwrap();
    let mut sink = RecordingSink::default();
    let verdicts = events
        .iter()
        .enumerate()
        .map(|(i, event)| warden.handle(event, world, &NoBypass, &mut sink, i as u64 * 50))
        .collect();
    (verdicts, warden)
}

#[test]
fn surface_walk_fires_with_depth_penalty() {
    let world = lake();
    let from = Vec3::new(0.5, 62.2, 0.5);
    let (verdicts, warden) = run(&world, &[moved(from, from)]);

    assert!(verdicts[0].cancel);
    assert_eq!(verdicts[0].correction, Some(from));

    let report = &warden.reports()[0];
    assert_eq!(report.check, CheckType::WaterWalk);
    // 0.8 below the surface at y=63, give or take float error.
    assert!((report.magnitude - 80.0).abs() < 1e-6);
}

#[test]
fn adjacent_stair_suppresses_surface_walk() {
    let mut world = lake();
    world.set(1, 62, 0, block_ids::WOOD_STAIRS, 0).unwrap();
    let from = Vec3::new(0.5, 62.2, 0.5);
    let (verdicts, warden) = run(&world, &[moved(from, from)]);

    assert_eq!(verdicts[0], Verdict::ALLOW);
    assert!(warden.reports().is_empty());
}

#[test]
fn every_half_height_block_suppresses_surface_walk() {
    for id in block_ids::HALF_HEIGHT {
        let mut world = lake();
        world.set(-1, 62, -1, id, 0).unwrap();
        let from = Vec3::new(0.5, 62.2, 0.5);
        let (verdicts, _) = run(&world, &[moved(from, from)]);
        assert!(!verdicts[0].cancel, "block {id} should suppress");
    }
}

#[test]
fn stream_jump_fires_on_leaving_flowing_water() {
    let mut world = ChunkedWorld::new();
    world.fill((8, 62, 8), (14, 62, 14), block_ids::STONE, 0).unwrap();
    world.set(10, 63, 10, block_ids::WATER, 2).unwrap();

    let from = Vec3::new(10.5, 63.3, 10.5);
    // Offsets to the nearest block edge: 0.5 on x and 0.275 on z, both
    // outside the stream band. Each axis counts its distance from the 0.3
    // stream push, so the penalty is (0.2 + 0.025) * 100 = 22.5.
    let to = Vec3::new(10.5, 64.0, 10.725);
    let (verdicts, warden) = run(&world, &[moved(from, to)]);

    assert!(verdicts[0].cancel);
    assert_eq!(verdicts[0].correction, Some(from));
    assert!((warden.reports()[0].magnitude - 22.5).abs() < 1e-6);
}

#[test]
fn swimming_across_the_lake_is_clean() {
    let world = lake();
    let events: Vec<_> = (0..6)
        .map(|i| {
            let x = f64::from(i) * 0.2 - 0.5;
            moved(Vec3::new(x, 61.3, 0.5), Vec3::new(x + 0.2, 61.3, 0.5))
        })
        .collect();
    let (verdicts, warden) = run(&world, &events);

    assert!(verdicts.iter().all(|v| *v == Verdict::ALLOW));
    assert!(warden.reports().is_empty());
}

#[test]
fn vl_decays_between_violations() {
    let world = lake();
    let surface = Vec3::new(0.5, 62.5, 0.5);
    let dry = Vec3::new(0.5, 80.0, 0.5);
    let (_, warden) = run(&world, &[moved(surface, surface), moved(dry, dry), moved(dry, dry)]);

    let vl = warden.players().get(STEVE).map(|p| p.moving.water_walk.vl).unwrap();
    assert!((vl - 50.0 * 0.95 * 0.95).abs() < 1e-9);
}
