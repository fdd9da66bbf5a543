//! Runs the fault-count and timing studies and prints their result tables.
//!
//! Verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::process::ExitCode;

use log::error;
use pagesim::{ExperimentConfig, ExperimentHarness, PolicyKind};

fn main() -> ExitCode {
    env_logger::init();

    let mut status = ExitCode::SUCCESS;
    for config in [
        ExperimentConfig::fault_study(),
        ExperimentConfig::timing_study(),
    ] {
        match ExperimentHarness::run(&config) {
            Ok(report) => {
                println!(
                    "# {} (seed {}, {} accesses, crc {:08x})",
                    report.name,
                    report.seed,
                    report.reference.len(),
                    report.reference.fingerprint()
                );
                print!("{}", report.results);
                for policy in PolicyKind::ALL {
                    for (from, to) in report.results.anomalies(policy) {
                        println!("# {policy}: faults rise from {from} to {to} frames");
                    }
                }
                println!();
            }
            Err(err) => {
                error!("{}: {err}", config.name);
                if !err.completed.is_empty() {
                    print!("{}", err.completed);
                }
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
