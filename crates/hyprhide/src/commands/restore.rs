use clap::ArgMatches;
use tracing::{error, info};

use hyprhide_core::{events, window_ops};

use super::helpers::load_config_with_warning;

pub(crate) fn handle_restore_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let address = matches.get_one::<String>("address").map(String::as_str);

    info!(event = "cli.restore_started", address = ?address);

    let config = load_config_with_warning();

    match window_ops::restore_window(&config, address) {
        Ok(record) => {
            println!("✅ Restored '{}' ({})", record.label(), record.address);
            println!("   Workspace {} at {}", record.workspace, record.position);
            info!(event = "cli.restore_completed", address = %record.address);
            Ok(())
        }
        Err(e) => {
            match address {
                Some(address) => eprintln!("❌ Failed to restore window '{}': {}", address, e),
                None => eprintln!("❌ Failed to restore window: {}", e),
            }
            error!(event = "cli.restore_failed", address = ?address, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
