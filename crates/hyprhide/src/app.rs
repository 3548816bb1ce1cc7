use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("hyprhide")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hide the focused Hyprland window off-screen and restore it later")
        .long_about("hyprhide parks the focused window far outside every monitor and remembers where it came from. Hidden windows keep running and can be brought back to their original workspace, position and tiling state.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("hide").about("Hide the focused window"))
        .subcommand(
            Command::new("list")
                .about("List hidden windows")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("no-sweep")
                        .long("no-sweep")
                        .help("Skip reconciling the registry with the live window list")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("restore")
                .about("Restore a hidden window (the most recently hidden one by default)")
                .arg(
                    Arg::new("address")
                        .help("Window address as shown by 'hyprhide list'")
                        .index(1)
                )
        )
        .subcommand(
            Command::new("sweep")
                .about("Reconcile hidden-window records with the live window list")
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
