use clap::ArgMatches;
use tracing::{error, info};

use hyprhide_core::{events, window_ops};

use super::helpers::load_config_with_warning;

pub(crate) fn handle_hide_command(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.hide_started");

    let config = load_config_with_warning();

    match window_ops::hide_window(&config) {
        Ok(record) => {
            println!("✅ Hidden '{}' ({})", record.label(), record.address);
            println!("   Use 'hyprhide restore {}' to bring it back.", record.address);
            info!(event = "cli.hide_completed", address = %record.address);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to hide window: {}", e);
            error!(event = "cli.hide_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
