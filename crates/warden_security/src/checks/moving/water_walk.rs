//! # Water-Walk
//!
//! Two illegal ways of crossing liquid:
//!
//! - **Surface walk**: moving horizontally from liquid to liquid while the
//!   feet stay just under the surface, as if the surface were solid.
//! - **Stream jump**: leaving a flowing stream for dry land with a horizontal
//!   offset the stream current cannot explain.
//!
//! Both feed one shared, decaying violation level and are mutually
//! exclusive per event. Stairs and slabs next to the origin produce the same
//! surface signature legitimately, so they suppress the surface pattern.

use warden_core::BlockAccess;
use warden_shared::{block_ids, Vec3};

use crate::checks::{CheckContext, CheckOutcome, CheckType};
use crate::config::WaterWalkConfig;
use crate::players::MovingData;

/// Feet deeper than this below the surface count as swimming.
const MAX_SURFACE_DEPTH: f64 = 0.8;

/// Horizontal offset a stream legitimately pushes a player by.
const STREAM_OFFSET: f64 = 0.30;

/// Offsets inside this band are explained by the stream.
const STREAM_BAND: (f64, f64) = (0.28, 0.31);

/// Checks one move. Returns `from` as the correction when cancelled.
#[allow(clippy::float_cmp)]
pub fn check(
    ctx: &mut CheckContext<'_>,
    data: &mut MovingData,
    config: &WaterWalkConfig,
    from: Vec3,
    to: Vec3,
) -> CheckOutcome {
    debug_assert!(config.enabled, "water-walk check run while disabled");
    if !config.enabled {
        return CheckOutcome::CLEAN;
    }

    let evaluator = ctx.evaluator;
    let world = ctx.world;

    let from_liquid = evaluator.evaluate(world, from).is_liquid();
    let to_liquid = evaluator.evaluate(world, to).is_liquid();
    let up_liquid = evaluator.evaluate(world, to.raised(1.0)).is_liquid();

    // Head height. History smooths out single-event misses near ceilings.
    let table = evaluator.table();
    let solid_at = |point: Vec3| {
        let (x, y, z) = point.block_coords();
        table.get(world.block_type_at(x, y, z)).is_solid()
    };
    let head_solid = solid_at(to.raised(2.0)) || solid_at(from.raised(2.0));
    let above_solid = head_solid || data.any_blocks_above();
    data.rotate_blocks_above(head_solid);

    let (bx, by, bz) = from.block_coords();
    let in_stream = is_stream(world, bx, by, bz);
    let near_half_height = is_near_half_height(world, bx, by, bz);

    let delta_x = (java_round(to.x) - to.x).abs();
    let delta_z = (java_round(to.z) - to.z).abs();
    let delta_y = (from.y - to.y).abs();
    let depth = (to.y - to.y.ceil()).abs() + if to.y == to.y.ceil() { 1.0 } else { 0.0 };

    let level = &mut data.water_walk;
    level.decay(config.decay);

    let magnitude = if !near_half_height
        && from_liquid
        && to_liquid
        && !up_liquid
        && !above_solid
        && delta_y == 0.0
        && depth < MAX_SURFACE_DEPTH
    {
        Some(depth * 100.0)
    } else if in_stream
        && from_liquid
        && !to_liquid
        && !above_solid
        && outside_stream_band(delta_x)
        && outside_stream_band(delta_z)
    {
        Some(((delta_x - STREAM_OFFSET).abs() + (delta_z - STREAM_OFFSET).abs()) * 100.0)
    } else {
        None
    };

    let Some(magnitude) = magnitude else {
        return CheckOutcome::CLEAN;
    };

    level.add(magnitude);
    tracing::debug!(
        player = %ctx.player,
        magnitude,
        vl = level.vl,
        "Water-walk pattern matched"
    );

    let context = ctx.action_context(CheckType::WaterWalk);
    let cancel = level.escalate(&config.actions, context, &mut *ctx.sink);
    CheckOutcome {
        magnitude,
        cancel,
        correction: cancel.then_some(from),
    }
}

/// Rounds half up, toward positive infinity.
fn java_round(d: f64) -> f64 {
    (d + 0.5).floor()
}

fn outside_stream_band(delta: f64) -> bool {
    delta < STREAM_BAND.0 || delta > STREAM_BAND.1
}

/// Flowing water or lava with a non-zero level, i.e. an actual current.
fn is_stream<W: BlockAccess + ?Sized>(world: &W, x: i32, y: i32, z: i32) -> bool {
    let id = world.block_type_at(x, y, z).get();
    block_ids::is_any_liquid(id) && !block_ids::is_stationary_liquid(id) && world.block_data_at(x, y, z) != 0
}

/// The block itself, its eight horizontal neighbours, and the blocks
/// directly above and below.
fn is_near_half_height<W: BlockAccess + ?Sized>(world: &W, x: i32, y: i32, z: i32) -> bool {
    let ring = (-1..=1).flat_map(|dx| (-1..=1).map(move |dz| (dx, 0, dz)));
    ring.chain([(0, 1, 0), (0, -1, 0)])
        .any(|(dx, dy, dz)| {
            let id = world.block_type_at(x.saturating_add(dx), y.saturating_add(dy), z.saturating_add(dz));
            block_ids::is_half_height(id.get())
        })
}
