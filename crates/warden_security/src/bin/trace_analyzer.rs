//! # Trace Analyzer
//!
//! Replays a recorded scenario through the checks and reports every
//! correction and cancellation.
//!
//! ```toml
//! [[blocks]]
//! min = [-4, 60, -4]
//! max = [4, 62, 4]
//! id = 9
//!
//! [[events]]
//! at_ms = 0
//! type = "join"
//! player = 1
//! name = "Steve"
//!
//! [[events]]
//! at_ms = 50
//! type = "move"
//! player = 1
//! world = "world"
//! from = { x = 0.5, y = 62.5, z = 0.5 }
//! to = { x = 0.7, y = 62.5, z = 0.5 }
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;
use warden_core::{BlockId, BlockTypeTable, ChunkedWorld, ClassicCatalog};
use warden_security::{ConfigError, NoBypass, RecordingSink, SecurityResult, Warden, WardenConfig};
use warden_shared::HostEvent;

/// Trace Analyzer - replay recorded player events through the checks
#[derive(Parser, Debug)]
#[command(name = "trace_analyzer")]
#[command(about = "Replay a recorded scenario and report check violations")]
struct Args {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Check configuration; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every scored event, not only cancellations
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// A cuboid of identical blocks.
#[derive(Debug, Deserialize)]
struct BlockFill {
    min: [i32; 3],
    max: [i32; 3],
    id: u32,
    #[serde(default)]
    data: u8,
}

/// One recorded event.
#[derive(Debug, Deserialize)]
struct TimedEvent {
    at_ms: u64,
    #[serde(flatten)]
    event: HostEvent,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    blocks: Vec<BlockFill>,
    #[serde(default)]
    events: Vec<TimedEvent>,
}

fn load_scenario(path: &Path) -> SecurityResult<(ChunkedWorld, Vec<TimedEvent>)> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario = toml::from_str(&contents).map_err(ConfigError::from)?;

    let mut world = ChunkedWorld::new();
    for fill in &scenario.blocks {
        let id = BlockId::new(fill.id)?;
        let [x0, y0, z0] = fill.min;
        let [x1, y1, z1] = fill.max;
        world.fill((x0, y0, z0), (x1, y1, z1), id.get(), fill.data)?;
    }
    Ok((world, scenario.events))
}

fn run(args: &Args) -> SecurityResult<usize> {
    let config = match &args.config {
        Some(path) => WardenConfig::load(path)?,
        None => WardenConfig::default(),
    };
    let (world, events) = load_scenario(&args.scenario)?;
    tracing::info!(events = events.len(), chunks = world.chunk_count(), "Scenario loaded");

    let table = BlockTypeTable::build(&ClassicCatalog);
    let mut warden = Warden::new(config, &table)?;
    let mut sink = RecordingSink::default();

    println!();
    println!("┌─ EVENTS ─────────────────────────────────────────────────────────┐");
    let mut cancelled = 0;
    for timed in &events {
        let verdict = warden.handle(&timed.event, &world, &NoBypass, &mut sink, timed.at_ms);
        if verdict.cancel {
            cancelled += 1;
            match verdict.correction {
                Some(back) => println!(
                    "│ {:>8} ms  player {}  cancelled, back to ({:.3}, {:.3}, {:.3})",
                    timed.at_ms,
                    timed.event.player(),
                    back.x,
                    back.y,
                    back.z
                ),
                None => println!("│ {:>8} ms  player {}  cancelled", timed.at_ms, timed.event.player()),
            }
        }
    }
    println!("└──────────────────────────────────────────────────────────────────┘");

    if args.verbose {
        println!();
        println!("┌─ SCORED EVENTS ──────────────────────────────────────────────────┐");
        for report in warden.reports() {
            println!(
                "│ {:>8} ms  player {}  {:<16} +{:.2} -> VL {:.2}{}",
                report.at_ms,
                report.player,
                report.check,
                report.magnitude,
                report.vl,
                if report.cancelled { "  (cancelled)" } else { "" }
            );
        }
        println!("└──────────────────────────────────────────────────────────────────┘");
    }

    println!();
    println!("┌─ SUMMARY ────────────────────────────────────────────────────────┐");
    println!("│ Events:             {}", events.len());
    println!("│ Cancelled:          {cancelled}");
    for (check, stats) in warden.statistics().iter() {
        println!(
            "│ {:<19} {} violations, total deviation {:.2}",
            format!("{check}:"),
            stats.violations,
            stats.total_deviation
        );
    }
    for (player, message) in &sink.warnings {
        println!("│ Warned {player}: {message}");
    }
    for (player, reason) in &sink.kicks {
        println!("│ Kicked {player}: {reason}");
    }
    println!("└──────────────────────────────────────────────────────────────────┘");

    Ok(cancelled)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         WARDEN TRACE ANALYZER                                    ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");

    match run(&args) {
        Ok(0) => {
            println!();
            println!("✓ No cancellations");
            ExitCode::SUCCESS
        }
        Ok(cancelled) => {
            println!();
            println!("⚠ {cancelled} events cancelled - manual review recommended");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Trace analysis failed");
            ExitCode::FAILURE
        }
    }
}
