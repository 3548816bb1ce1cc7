use clap::ArgMatches;
use tracing::{error, info};

use hyprhide_core::{ReconcileSummary, events, reconcile_ops};

use super::helpers::load_config_with_warning;

pub(crate) fn handle_sweep_command(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.sweep_started");

    let config = load_config_with_warning();

    match reconcile_ops::sweep(&config) {
        Ok(summary) => {
            print_summary(&summary);
            info!(
                event = "cli.sweep_completed",
                synthesized = summary.synthesized.len(),
                removed = summary.removed.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to sweep hidden windows: {}", e);
            error!(event = "cli.sweep_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn print_summary(summary: &ReconcileSummary) {
    if summary.is_empty() {
        println!("✅ Hidden windows already in sync.");
        return;
    }

    println!("✅ Sweep completed: {} change(s)", summary.total_changes());
    if !summary.synthesized.is_empty() {
        println!("   Recovered parked windows:");
        for address in &summary.synthesized {
            println!("     + {}", address);
        }
    }
    if !summary.removed.is_empty() {
        println!("   Dropped records for closed windows:");
        for address in &summary.removed {
            println!("     - {}", address);
        }
    }
}
