use clap::ArgMatches;
use tracing::error;

use hyprhide_core::events;

pub mod helpers;

mod completions;
mod hide;
mod list;
mod restore;
mod sweep;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("hide", sub_matches)) => hide::handle_hide_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("restore", sub_matches)) => restore::handle_restore_command(sub_matches),
        Some(("sweep", sub_matches)) => sweep::handle_sweep_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
