//! wf-sim — batch spin simulator
//!
//! Runs complete spins end to end (begin → animate to completion → confirm
//! the landed slot against the committed winner) and reports the winner
//! histogram, for eyeballing fairness and catching targeting regressions.

use std::f64::consts::TAU;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use wf_core::{WheelError, WheelResult, normalize_angle, slice_span};
use wf_rng::WheelRng;
use wf_spin::{SpinTiming, begin_spin};

#[derive(Parser)]
#[command(name = "wf-sim", about = "WheelForge batch spin simulator")]
struct Args {
    /// Number of wheel entries
    #[arg(long, default_value_t = 8)]
    entries: usize,

    /// Number of spins to run
    #[arg(long, default_value_t = 10_000)]
    spins: u64,

    /// Seed for a reproducible run (omit to seed from the OS)
    #[arg(long)]
    seed: Option<u64>,

    /// Timing profile
    #[arg(long, value_enum, default_value = "studio")]
    profile: ProfileArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    Normal,
    Turbo,
    Studio,
}

impl ProfileArg {
    fn timing(self) -> SpinTiming {
        match self {
            Self::Normal => SpinTiming::normal(),
            Self::Turbo => SpinTiming::turbo(),
            Self::Studio => SpinTiming::studio(),
        }
    }
}

/// Per-slot outcome counts
#[derive(Debug, Serialize)]
struct SlotReport {
    label: String,
    wins: u64,
    observed: f64,
    expected: f64,
}

/// Full run report
#[derive(Debug, Serialize)]
struct RunReport {
    entries: usize,
    spins: u64,
    seeded: bool,
    slots: Vec<SlotReport>,
    max_deviation: f64,
}

fn main() -> WheelResult<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => WheelRng::from_seed(seed),
        None => WheelRng::new(),
    };

    if args.entries == 0 {
        return Err(WheelError::EmptyWheel);
    }
    let labels: Vec<String> = (0..args.entries).map(|i| format!("slot-{i}")).collect();
    let timing = args.profile.timing();
    let span = slice_span(labels.len());
    let pointer_angle = 0.0;

    let mut counts = vec![0u64; labels.len()];
    let mut wheel_angle = 0.0_f64;
    let mut now_ms = 0.0_f64;

    for _ in 0..args.spins {
        let spin = begin_spin(&mut rng, &labels, pointer_angle, wheel_angle, &timing, now_ms)?;

        // Drive the animation to completion the way a renderer would
        now_ms += timing.duration_ms;
        debug_assert!(spin.is_complete(now_ms));
        wheel_angle = spin.progress_angle(now_ms);

        // Read the landed slot off the final wheel angle and hold the
        // renderer to the committed winner
        let rest = normalize_angle(wheel_angle);
        let center = normalize_angle(pointer_angle - rest);
        let landed = ((center / span) as usize).min(labels.len() - 1);
        spin.confirm_landed(&labels[landed])?;

        counts[spin.winning_index()] += 1;
    }

    let expected = 1.0 / labels.len() as f64;
    let mut max_deviation = 0.0_f64;
    let slots: Vec<SlotReport> = labels
        .iter()
        .zip(&counts)
        .map(|(label, &wins)| {
            let observed = wins as f64 / args.spins.max(1) as f64;
            max_deviation = max_deviation.max((observed - expected).abs());
            SlotReport {
                label: label.clone(),
                wins,
                observed,
                expected,
            }
        })
        .collect();

    let report = RunReport {
        entries: args.entries,
        spins: args.spins,
        seeded: args.seed.is_some(),
        slots,
        max_deviation,
    };

    log::info!(
        "{} spins over {} entries, max deviation {:.5}",
        args.spins,
        args.entries,
        report.max_deviation
    );
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize report: {err}"),
    }

    // Final wheel angle sanity: after the last spin the wheel rests with
    // some slot center exactly on the pointer
    let misalign = normalize_angle(normalize_angle(wheel_angle) % span - span / 2.0);
    let misalign = misalign.min(TAU - misalign);
    debug_assert!(args.spins == 0 || misalign < 1e-6);

    Ok(())
}
