use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use hyprhide_core::{WindowRecord, events, reconcile_ops, window_ops};

use super::helpers::load_config_with_warning;

#[derive(Serialize)]
struct HiddenWindowEntry<'a> {
    #[serde(flatten)]
    record: &'a WindowRecord,
    restore_command: String,
}

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let sweep = !matches.get_flag("no-sweep");

    info!(
        event = "cli.list_started",
        json_output = json_output,
        sweep = sweep
    );

    if sweep {
        let config = load_config_with_warning();
        if let Err(e) = reconcile_ops::sweep(&config) {
            eprintln!("❌ Failed to sweep hidden windows: {}", e);
            eprintln!("   Use 'hyprhide list --no-sweep' to list records without Hyprland.");
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    }

    match window_ops::list_hidden_windows() {
        Ok(records) => {
            if json_output {
                let entries: Vec<HiddenWindowEntry> = records
                    .iter()
                    .map(|record| HiddenWindowEntry {
                        record,
                        restore_command: format!("hyprhide restore {}", record.address),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if records.is_empty() {
                println!("No hidden windows.");
            } else {
                println!("Hidden windows:");
                let formatter = crate::table::TableFormatter::new(&records);
                formatter.print_table(&records);
                if records.iter().any(|r| r.synthesized) {
                    println!("* recovered by sweep; original placement unknown");
                }
            }

            info!(event = "cli.list_completed", count = records.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to list hidden windows: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
