//! # WARDEN Security - The Referee
//!
//! Violation scoring and checks on top of the spatial classification in
//! `warden_core`.
//!
//! ## Features
//!
//! - **Water-Walk**: surface walking and stream jumping
//! - **Fight Direction / Reach**: attacks off the view ray or out of reach
//! - **Violation Levels**: leaky-bucket scoring with penalty windows
//! - **Action Lists**: log, warn, cancel and kick by threshold
//!
//! ## Architecture
//!
//! ```text
//! HOST                              WARDEN
//!     │                                │
//!     │─── HostEvent ─────────────────►│ players ─► checks
//!     │                                │               │
//!     │                                │     ViolationLevel + ActionList
//!     │                                │               │
//!     │◄── Verdict (cancel, from) ─────┤◄──────────────┘
//!     │◄── warn / kick ────────────────┤ ActionSink
//! ```
//!
//! ## Example
//!
//! ```
//! use warden_core::{BlockTypeTable, ChunkedWorld, ClassicCatalog};
//! use warden_security::{NoBypass, RecordingSink, Warden, WardenConfig};
//! use warden_shared::{HostEvent, PlayerId, Vec3};
//!
//! let table = BlockTypeTable::build(&ClassicCatalog);
//! let mut warden = Warden::new(WardenConfig::default(), &table)?;
//! let world = ChunkedWorld::new();
//! let mut sink = RecordingSink::default();
//!
//! let event = HostEvent::Move {
//!     player: PlayerId(1),
//!     world: "world".into(),
//!     from: Vec3::new(0.5, 70.0, 0.5),
//!     to: Vec3::new(0.6, 70.0, 0.5),
//! };
//! let verdict = warden.handle(&event, &world, &NoBypass, &mut sink, 0);
//! assert!(!verdict.cancel);
//! # Ok::<(), warden_security::ConfigError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod actions;
pub mod checks;
pub mod config;
pub mod error;
pub mod players;
pub mod statistics;
pub mod violation;
pub mod warden;

pub use actions::{execute_actions, Action, ActionContext, ActionList, ActionSink, ActionStep, RecordingSink};
pub use checks::{CheckContext, CheckOutcome, CheckType, NoBypass, PermissionCheck};
pub use config::{CheckConfigSet, ConfigError, DirectionConfig, ReachConfig, WardenConfig, WaterWalkConfig};
pub use error::{SecurityError, SecurityResult};
pub use players::{FightData, MovingData, PlayerChecks, PlayerRegistry};
pub use statistics::{CheckStats, Statistics};
pub use violation::ViolationLevel;
pub use warden::{Verdict, ViolationReport, Warden};
