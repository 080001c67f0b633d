use crate::balancer::SeparationGroup;
use crate::roster::GameType;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_team_count.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Parses a `--separate` value such as "Anisio,Mariano" into a group.
/// Names are trimmed and blanks dropped.
pub fn parse_separation_group(value: &str) -> Result<SeparationGroup, String> {
    let names: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if names.len() < 2 {
        return Err(format!(
            "'{value}' needs at least two comma-separated names"
        ));
    }

    Ok(SeparationGroup::new(names))
}

/// Pickup soccer team balancer
///
/// Splits a roster into balanced teams. Every team gets a fair share of each
/// position and the teams' total ratings stay as close as possible.
///
/// The roster is a JSON or TOML file listing players with a name, an optional
/// position label (e.g. "Zagueiro", "Lat E", "Ata") and an optional rating or
/// star score. Names containing 🧤 are treated as goalkeepers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Roster file (.json or .toml)
    #[arg(value_name = "ROSTER")]
    pub roster: Option<String>,

    /// Number of teams to form. Defaults to the configured team count.
    #[arg(short = 't', long = "teams", help_heading = "Balancing")]
    pub teams: Option<usize>,

    /// Match format. Enables the roster size and goalkeeper checks.
    #[arg(
        short = 'g',
        long = "game-type",
        value_enum,
        help_heading = "Balancing"
    )]
    pub game_type: Option<GameType>,

    /// Keep these players on different teams, e.g. --separate "Anisio,Mariano".
    /// Can be given multiple times; adds to the groups in the config file.
    #[arg(
        long = "separate",
        value_name = "NAMES",
        value_parser = parse_separation_group,
        help_heading = "Balancing"
    )]
    pub separate: Vec<SeparationGroup>,

    /// Reject position labels that match no known alias instead of treating
    /// them as midfielders.
    #[arg(long = "strict-positions", help_heading = "Balancing")]
    pub strict_positions: bool,

    /// Skip the roster size and goalkeeper checks
    #[arg(long = "skip-checks", help_heading = "Balancing")]
    pub skip_checks: bool,

    /// Print the teams as JSON
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Plain output without colors
    #[arg(short = 'p', long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update the default team count in config
    #[arg(long = "set-teams", value_name = "N", help_heading = "Configuration")]
    pub new_team_count: Option<usize>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Enable debug mode. Logs are also printed to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
