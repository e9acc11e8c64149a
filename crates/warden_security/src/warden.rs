//! # Warden
//!
//! Event dispatcher. Owns the configuration, the per-player arena and the
//! violation reports; borrows the block table and, per event, the world and
//! the host's side-effect sink.
//!
//! Disabled checks and bypassing players are filtered here, before any
//! scoring, so neither ever touches a violation level.

use warden_core::{BlockAccess, BlockTypeTable, LocationEvaluator};
use warden_shared::{HostEvent, PlayerId, TargetBox, Vec3};

use crate::actions::ActionSink;
use crate::checks::fight::{direction, reach};
use crate::checks::moving::water_walk;
use crate::checks::{CheckContext, CheckOutcome, CheckType, PermissionCheck};
use crate::config::{ConfigError, WardenConfig};
use crate::players::{PlayerChecks, PlayerRegistry};
use crate::statistics::Statistics;

/// One scored event.
#[derive(Clone, Debug, PartialEq)]
pub struct ViolationReport {
    /// Offending player.
    pub player: PlayerId,
    /// Check that scored the event.
    pub check: CheckType,
    /// Deviation of this event.
    pub magnitude: f64,
    /// Violation level after scoring.
    pub vl: f64,
    /// Whether the event was cancelled.
    pub cancelled: bool,
    /// Event time in milliseconds.
    pub at_ms: u64,
}

/// What the host must do with an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Verdict {
    /// Veto the event.
    pub cancel: bool,
    /// Move the player back here.
    pub correction: Option<Vec3>,
}

impl Verdict {
    /// Let the event through.
    pub const ALLOW: Self = Self { cancel: false, correction: None };

    fn merge(&mut self, outcome: &CheckOutcome) {
        self.cancel |= outcome.cancel;
        if self.correction.is_none() {
            self.correction = outcome.correction;
        }
    }
}

/// The check engine.
pub struct Warden<'t> {
    config: WardenConfig,
    table: &'t BlockTypeTable,
    players: PlayerRegistry,
    reports: Vec<ViolationReport>,
    statistics: Statistics,
}

impl<'t> Warden<'t> {
    /// Creates an engine, validating `config` first.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found. An engine is never built over
    /// a configuration the checks cannot act on.
    pub fn new(config: WardenConfig, table: &'t BlockTypeTable) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            table,
            players: PlayerRegistry::new(),
            reports: Vec::new(),
            statistics: Statistics::new(),
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &WardenConfig {
        &self.config
    }

    /// Per-player check data.
    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Cumulative statistics.
    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Returns all reports.
    #[must_use]
    pub fn reports(&self) -> &[ViolationReport] {
        &self.reports
    }

    /// Takes ownership of reports.
    pub fn take_reports(&mut self) -> Vec<ViolationReport> {
        std::mem::take(&mut self.reports)
    }

    /// Handles one host event.
    pub fn handle(
        &mut self,
        event: &HostEvent,
        world: &dyn BlockAccess,
        permissions: &dyn PermissionCheck,
        sink: &mut dyn ActionSink,
        now_ms: u64,
    ) -> Verdict {
        match event {
            HostEvent::Join { player, name } => {
                self.players.join(*player, name.as_str());
                Verdict::ALLOW
            }
            HostEvent::Leave { player } => {
                self.players.leave(*player);
                Verdict::ALLOW
            }
            HostEvent::Move { player, world: world_name, from, to } => {
                self.handle_move(*player, world_name, *from, *to, world, permissions, sink, now_ms)
            }
            HostEvent::Attack { player, world: world_name, eye, direction: view, target } => self.handle_attack(
                *player,
                world_name,
                *eye,
                *view,
                target,
                world,
                permissions,
                sink,
                now_ms,
            ),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_move(
        &mut self,
        player: PlayerId,
        world_name: &str,
        from: Vec3,
        to: Vec3,
        world: &dyn BlockAccess,
        permissions: &dyn PermissionCheck,
        sink: &mut dyn ActionSink,
        now_ms: u64,
    ) -> Verdict {
        if !from.is_inside_world() || !to.is_inside_world() {
            tracing::debug!(player = %player, "Ignoring move outside the world bounds");
            return Verdict::ALLOW;
        }

        let set = self.config.for_world(world_name);
        if !set.is_enabled(CheckType::WaterWalk) || permissions.has_bypass(player, CheckType::WaterWalk) {
            return Verdict::ALLOW;
        }

        let PlayerChecks { name, moving, .. } = self.players.get_or_create(player);
        let mut ctx = CheckContext {
            player,
            player_name: name.as_str(),
            evaluator: LocationEvaluator::new(self.table),
            world,
            world_name,
            sink,
            now_ms,
        };
        let outcome = water_walk::check(&mut ctx, moving, &set.moving.waterwalk, from, to);
        let vl = moving.water_walk.vl;

        self.record(player, CheckType::WaterWalk, &outcome, vl, now_ms);
        let mut verdict = Verdict::ALLOW;
        verdict.merge(&outcome);
        verdict
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_attack(
        &mut self,
        player: PlayerId,
        world_name: &str,
        eye: Vec3,
        view: Vec3,
        target: &TargetBox,
        world: &dyn BlockAccess,
        permissions: &dyn PermissionCheck,
        sink: &mut dyn ActionSink,
        now_ms: u64,
    ) -> Verdict {
        let set = self.config.for_world(world_name);
        let run_direction = set.is_enabled(CheckType::Direction) && !permissions.has_bypass(player, CheckType::Direction);
        let run_reach = set.is_enabled(CheckType::Reach) && !permissions.has_bypass(player, CheckType::Reach);
        if !run_direction && !run_reach {
            return Verdict::ALLOW;
        }

        let PlayerChecks { name, fight, .. } = self.players.get_or_create(player);
        let mut ctx = CheckContext {
            player,
            player_name: name.as_str(),
            evaluator: LocationEvaluator::new(self.table),
            world,
            world_name,
            sink,
            now_ms,
        };

        let mut scored = Vec::with_capacity(2);
        if run_direction {
            let outcome = direction::check(&mut ctx, fight, &set.fight.direction, eye, view, target);
            scored.push((CheckType::Direction, outcome, fight.direction.vl));
        }
        if run_reach {
            let outcome = reach::check(&mut ctx, fight, &set.fight.reach, eye, target);
            scored.push((CheckType::Reach, outcome, fight.reach.vl));
        }

        let mut verdict = Verdict::ALLOW;
        for (check, outcome, vl) in scored {
            self.record(player, check, &outcome, vl, now_ms);
            verdict.merge(&outcome);
        }
        verdict
    }

    fn record(&mut self, player: PlayerId, check: CheckType, outcome: &CheckOutcome, vl: f64, at_ms: u64) {
        self.statistics.record(check, outcome.magnitude);
        if outcome.magnitude > 0.0 || outcome.cancel {
            if outcome.cancel {
                tracing::info!(player = %player, check = %check, vl, "Event cancelled");
            }
            self.reports.push(ViolationReport {
                player,
                check,
                magnitude: outcome.magnitude,
                vl,
                cancelled: outcome.cancel,
                at_ms,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionList, RecordingSink};
    use crate::checks::NoBypass;
    use warden_core::{ChunkedWorld, ClassicCatalog};
    use warden_shared::block_ids;

    struct BypassAll;

    impl PermissionCheck for BypassAll {
        fn has_bypass(&self, _player: PlayerId, _check: CheckType) -> bool {
            true
        }
    }

    fn lake() -> ChunkedWorld {
        let mut world = ChunkedWorld::new();
        world.fill((-4, 60, -4), (4, 62, 4), block_ids::STATIONARY_WATER, 0).unwrap();
        world
    }

    fn surface_move() -> HostEvent {
        HostEvent::Move {
            player: PlayerId(1),
            world: "world".into(),
            from: Vec3::new(0.5, 62.5, 0.5),
            to: Vec3::new(0.7, 62.5, 0.5),
        }
    }

    #[test]
    fn test_surface_move_is_corrected() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut warden = Warden::new(WardenConfig::default(), &table).unwrap();
        let mut sink = RecordingSink::default();
        let world = lake();

        warden.handle(
            &HostEvent::Join { player: PlayerId(1), name: "Steve".into() },
            &world,
            &NoBypass,
            &mut sink,
            0,
        );
        let verdict = warden.handle(&surface_move(), &world, &NoBypass, &mut sink, 50);

        assert!(verdict.cancel);
        assert_eq!(verdict.correction, Some(Vec3::new(0.5, 62.5, 0.5)));
        assert_eq!(warden.reports().len(), 1);
        assert_eq!(warden.reports()[0].check, CheckType::WaterWalk);
        assert_eq!(warden.statistics().get(CheckType::WaterWalk).violations, 1);
    }

    #[test]
    fn test_disabled_check_leaves_no_trace() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let config = WardenConfig::from_toml_str(
            r"
            [global.moving.waterwalk]
            enabled = false
            ",
        )
        .unwrap();
        let mut warden = Warden::new(config, &table).unwrap();
        let mut sink = RecordingSink::default();

        let verdict = warden.handle(&surface_move(), &lake(), &NoBypass, &mut sink, 0);
        assert_eq!(verdict, Verdict::ALLOW);
        assert!(warden.reports().is_empty());
        assert!(warden.players().get(PlayerId(1)).is_none());
    }

    #[test]
    fn test_bypass_skips_every_check() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut warden = Warden::new(WardenConfig::default(), &table).unwrap();
        let mut sink = RecordingSink::default();
        let world = lake();

        assert_eq!(warden.handle(&surface_move(), &world, &BypassAll, &mut sink, 0), Verdict::ALLOW);

        let attack = HostEvent::Attack {
            player: PlayerId(1),
            world: "world".into(),
            eye: Vec3::new(0.0, 65.6, 0.0),
            direction: Vec3::X,
            target: TargetBox::new(Vec3::new(-9.0, 65.6, 0.0), 0.6, 1.8),
        };
        assert_eq!(warden.handle(&attack, &world, &BypassAll, &mut sink, 0), Verdict::ALLOW);
        assert!(warden.reports().is_empty());
    }

    #[test]
    fn test_attack_runs_both_fight_checks() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut warden = Warden::new(WardenConfig::default(), &table).unwrap();
        let mut sink = RecordingSink::default();
        let world = ChunkedWorld::new();

        // Behind the attacker and far away.
        let attack = HostEvent::Attack {
            player: PlayerId(4),
            world: "world".into(),
            eye: Vec3::new(0.0, 65.6, 0.0),
            direction: Vec3::X,
            target: TargetBox::new(Vec3::new(-9.0, 65.6, 0.0), 0.6, 1.8),
        };
        let verdict = warden.handle(&attack, &world, &NoBypass, &mut sink, 10);
        assert!(verdict.cancel);
        assert_eq!(verdict.correction, None);

        let checks: Vec<_> = warden.take_reports().into_iter().map(|r| r.check).collect();
        assert_eq!(checks, vec![CheckType::Direction, CheckType::Reach]);
        assert!(warden.reports().is_empty());
    }

    #[test]
    fn test_move_outside_world_is_ignored() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut warden = Warden::new(WardenConfig::default(), &table).unwrap();
        let mut sink = RecordingSink::default();
        let world = ChunkedWorld::new();

        for far in [Vec3::new(0.5, 1e12, 0.5), Vec3::new(-1e15, 64.0, 0.5), Vec3::new(0.5, f64::INFINITY, 0.5)] {
            let event = HostEvent::Move { player: PlayerId(2), world: "world".into(), from: far, to: far };
            assert_eq!(warden.handle(&event, &world, &NoBypass, &mut sink, 0), Verdict::ALLOW);
        }
        assert!(warden.reports().is_empty());
        assert!(warden.players().get(PlayerId(2)).is_none());
    }

    #[test]
    fn test_world_edge_move_is_evaluated() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut warden = Warden::new(WardenConfig::default(), &table).unwrap();
        let mut sink = RecordingSink::default();
        let world = ChunkedWorld::new();

        let edge = Vec3::new(29_999_999.7, 255.9, -29_999_999.7);
        let event = HostEvent::Move { player: PlayerId(2), world: "world".into(), from: edge, to: edge };
        assert_eq!(warden.handle(&event, &world, &NoBypass, &mut sink, 0), Verdict::ALLOW);
        assert!(warden.players().get(PlayerId(2)).is_some());
    }

    #[test]
    fn test_new_rejects_enabled_check_without_actions() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut config = WardenConfig::default();
        config.global.moving.waterwalk.actions = ActionList::default();

        let err = Warden::new(config, &table).err();
        assert!(matches!(err, Some(ConfigError::EmptyActionList { .. })));
    }

    #[test]
    fn test_new_rejects_invalid_world_override() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut config = WardenConfig::default();
        let mut nether = config.global.clone();
        nether.fight.reach.limit = -1.0;
        config.worlds.insert("nether".into(), nether);

        assert!(Warden::new(config, &table).is_err());
    }

    #[test]
    fn test_leave_discards_player_data() {
        let table = BlockTypeTable::build(&ClassicCatalog);
        let mut warden = Warden::new(WardenConfig::default(), &table).unwrap();
        let mut sink = RecordingSink::default();
        let world = lake();

        warden.handle(&surface_move(), &world, &NoBypass, &mut sink, 0);
        assert!(warden.players().get(PlayerId(1)).is_some());

        warden.handle(&HostEvent::Leave { player: PlayerId(1) }, &world, &NoBypass, &mut sink, 1);
        assert!(warden.players().get(PlayerId(1)).is_none());
    }
}
