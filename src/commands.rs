use crate::balancer::{
    Player, SeparationGroup, Team, balance_teams_with_separation, rating_spread,
};
use crate::cli::Args;
use crate::config::Config;
use crate::display::{render_json, render_teams};
use crate::error::AppError;
use crate::roster::{GameType, check_roster, ensure_known_positions, load_roster};
use std::io::stdout;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.json && args.plain {
        return Err(AppError::config_error(
            "Cannot use both --json and --plain (-p) output simultaneously",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    if args.teams == Some(0) || args.new_team_count == Some(0) {
        return Err(AppError::config_error("Team count must be at least 1"));
    }
    Ok(())
}

/// Settings for one balancing run, merged from the command line and config.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceOptions {
    pub team_count: usize,
    pub game_type: Option<GameType>,
    pub strict_positions: bool,
    pub skip_checks: bool,
    pub separation_groups: Vec<SeparationGroup>,
}

impl BalanceOptions {
    /// Command line values win; separation groups from both sources apply.
    pub fn from_args(args: &Args, config: &Config) -> Self {
        let mut separation_groups = config.separation_groups();
        separation_groups.extend(args.separate.iter().cloned());

        Self {
            team_count: args.teams.unwrap_or(config.default_team_count),
            game_type: args.game_type.or(config.game_type),
            strict_positions: args.strict_positions || config.strict_positions,
            skip_checks: args.skip_checks,
            separation_groups,
        }
    }
}

/// Applies the caller-side roster policy and balances.
///
/// Strict position checking and the roster preconditions run first; the
/// balancer itself accepts any roster.
pub fn balance_roster(players: &[Player], options: &BalanceOptions) -> Result<Vec<Team>, AppError> {
    if options.strict_positions {
        ensure_known_positions(players)?;
    }
    if !options.skip_checks {
        check_roster(players, options.team_count, options.game_type)?;
    }

    let teams = balance_teams_with_separation(
        players,
        options.team_count,
        &options.separation_groups,
    );
    info!(
        "Formed {} teams with rating spread {:.2}",
        teams.len(),
        rating_spread(&teams)
    );
    Ok(teams)
}

/// Handles the default command: load the roster, balance it and print the teams.
pub async fn handle_balance_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let Some(roster_path) = args.roster.as_deref() else {
        return Err(AppError::config_error(
            "No roster file given. Run with --help for usage.",
        ));
    };

    let players = load_roster(roster_path).await?;
    let options = BalanceOptions::from_args(args, config);
    let teams = balance_roster(&players, &options)?;

    if args.json {
        println!("{}", render_json(&teams)?);
    } else {
        render_teams(&mut stdout(), &teams, args.plain)?;
    }

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Applies the configuration flags to the config file at `path` and saves it.
///
/// Only the file is read, so environment overrides never end up saved. A file
/// that fails to parse is reported instead of being replaced with defaults.
pub async fn update_config_file(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_file_or_default(path).await?;

    if let Some(team_count) = args.new_team_count {
        config.default_team_count = team_count;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

/// Handles configuration update commands (--set-teams, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args).await?;

    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["team_balancer"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    fn futsal_roster() -> Vec<Player> {
        let mut players = vec![
            Player::new("g1", "Kebler 🧤", "Goleiro").with_rating(3.0),
            Player::new("g2", "Joaquim 🧤", "Goleiro").with_rating(4.0),
        ];
        for (i, name) in ["Anisio", "Mariano", "Lopes", "Boka", "Jean", "Davi", "Lucas", "JP"]
            .iter()
            .enumerate()
        {
            players.push(Player::new(format!("o{i}"), *name, "Meio").with_rating(i as f64 % 5.0 + 1.0));
        }
        players
    }

    #[test]
    fn test_validate_args_conflicts() {
        assert!(validate_args(&parse(&["r.json", "--json", "--plain"])).is_err());
        assert!(validate_args(&parse(&["--set-log-file", "a.log", "--clear-log-file"])).is_err());
        assert!(validate_args(&parse(&["r.json", "-t", "0"])).is_err());
        assert!(validate_args(&parse(&["r.json", "--json"])).is_ok());
    }

    #[test]
    fn test_options_merge_args_over_config() {
        let config = Config {
            default_team_count: 3,
            game_type: Some(GameType::Society),
            strict_positions: true,
            separation_groups: vec![vec!["Anisio".to_string(), "Mariano".to_string()]],
            log_file_path: None,
        };

        let options = BalanceOptions::from_args(
            &parse(&["r.json", "-t", "2", "-g", "futsal", "--separate", "Lucas,JP"]),
            &config,
        );
        assert_eq!(options.team_count, 2);
        assert_eq!(options.game_type, Some(GameType::Futsal));
        assert!(options.strict_positions);
        assert_eq!(options.separation_groups.len(), 2);

        let defaults = BalanceOptions::from_args(&parse(&["r.json"]), &config);
        assert_eq!(defaults.team_count, 3);
        assert_eq!(defaults.game_type, Some(GameType::Society));
        assert_eq!(defaults.separation_groups.len(), 1);
    }

    #[test]
    fn test_balance_roster_runs_checks() {
        let options = BalanceOptions {
            team_count: 2,
            game_type: Some(GameType::Society),
            strict_positions: false,
            skip_checks: false,
            separation_groups: Vec::new(),
        };
        // Ten players cannot fill two society teams
        let result = balance_roster(&futsal_roster(), &options);
        assert!(matches!(result, Err(AppError::Precondition(_))));

        let skipped = BalanceOptions {
            skip_checks: true,
            ..options
        };
        let teams = balance_roster(&futsal_roster(), &skipped).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams.iter().map(Team::len).sum::<usize>(), 10);
    }

    #[test]
    fn test_balance_roster_strict_positions() {
        let mut players = futsal_roster();
        players.push(Player::new("x", "Cassio", "Libero"));
        let options = BalanceOptions {
            team_count: 2,
            game_type: None,
            strict_positions: true,
            skip_checks: false,
            separation_groups: Vec::new(),
        };

        let result = balance_roster(&players, &options);
        assert!(matches!(result, Err(AppError::UnknownPosition { .. })));

        let lenient = BalanceOptions {
            strict_positions: false,
            ..options
        };
        assert!(balance_roster(&players, &lenient).is_ok());
    }

    #[test]
    fn test_balance_roster_applies_separation() {
        let options = BalanceOptions {
            team_count: 2,
            game_type: Some(GameType::Futsal),
            strict_positions: false,
            skip_checks: false,
            separation_groups: vec![SeparationGroup::new(["Kebler", "Joaquim"])],
        };
        let teams = balance_roster(&futsal_roster(), &options).unwrap();
        for team in &teams {
            let keepers = team
                .players
                .iter()
                .filter(|p| p.name.contains('🧤'))
                .count();
            assert_eq!(keepers, 1);
        }
    }

    #[test]
    fn test_futsal_labels_pass_strict_positions() {
        let players = vec![
            Player::new("1", "Kebler 🧤", "Goleiro"),
            Player::new("2", "Lopes", "Fixo"),
            Player::new("3", "Mariano", "Ala D"),
            Player::new("4", "Jean", "Ala E"),
            Player::new("5", "Boka", "Pivô"),
        ];
        let options = BalanceOptions {
            team_count: 1,
            game_type: Some(GameType::Futsal),
            strict_positions: true,
            skip_checks: false,
            separation_groups: Vec::new(),
        };

        let teams = balance_roster(&players, &options).unwrap();
        assert_eq!(teams[0].len(), 5);
    }

    #[tokio::test]
    async fn test_update_config_keeps_existing_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        let path_str = path.to_string_lossy().to_string();
        let saved = Config {
            default_team_count: 2,
            game_type: Some(GameType::Futsal),
            strict_positions: true,
            separation_groups: vec![vec!["Anisio".to_string(), "Mariano".to_string()]],
            log_file_path: None,
        };
        saved.save_to_path(&path_str).await.unwrap();

        let updated = update_config_file(&path_str, &parse(&["--set-teams", "3"]))
            .await
            .unwrap();

        assert_eq!(updated.default_team_count, 3);
        let reloaded = Config::load_from_path(&path_str).await.unwrap();
        assert_eq!(reloaded, Config { default_team_count: 3, ..saved });
    }

    #[tokio::test]
    async fn test_update_config_reports_broken_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        let path_str = path.to_string_lossy().to_string();
        let broken = "default_team_count = 2\nseparation_groups = [[\"Anisio\", \"Mariano\"]\n";
        tokio::fs::write(&path, broken).await.unwrap();

        let result = update_config_file(&path_str, &parse(&["--set-teams", "3"])).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));

        // The file is left as the user wrote it
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, broken);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_config_does_not_save_environment_overrides() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let path_str = path.to_string_lossy().to_string();
        unsafe {
            std::env::set_var(env_vars::GAME_TYPE, "campo");
        }

        let result = update_config_file(&path_str, &parse(&["--set-teams", "4"])).await;

        unsafe {
            std::env::remove_var(env_vars::GAME_TYPE);
        }
        let updated = result.unwrap();
        assert_eq!(updated.default_team_count, 4);
        assert_eq!(updated.game_type, None);

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(!content.contains("campo"));
    }
}
