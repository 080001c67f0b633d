use super::colors::{header_fg, position_fg, rating_fg, rule_fg, summary_fg, text_fg};
use crate::balancer::{Player, Team, rating_spread};
use crate::constants::display::{NAME_COLUMN_WIDTH, POSITION_COLUMN_WIDTH, RULE_WIDTH};
use crate::error::AppError;
use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use serde::Serialize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Pads `text` with spaces up to `width` terminal columns.
/// Emoji and accented names count by their display width, not their bytes.
fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - used))
}

/// Header line of a team, e.g. `Team 1 (5 players, total 17.0)`
pub fn format_team_header(team: &Team) -> String {
    let noun = if team.len() == 1 { "player" } else { "players" };
    format!(
        "{} ({} {noun}, total {:.1})",
        team.display_name(),
        team.len(),
        team.total_rating
    )
}

/// One player row: position tag, name and rating in fixed columns
pub fn format_player_line(player: &Player) -> String {
    format!(
        "{}{}{:>4.1}",
        pad_to_width(player.canonical_position().tag(), POSITION_COLUMN_WIDTH),
        pad_to_width(&player.name, NAME_COLUMN_WIDTH),
        player.resolved_rating()
    )
}

/// Closing line comparing the strongest and the weakest team
pub fn format_summary(teams: &[Team]) -> String {
    let spread = rating_spread(teams);
    if teams.len() < 2 {
        return format!("Rating spread: {spread:.1}");
    }

    let strongest = teams
        .iter()
        .map(|t| t.total_rating)
        .fold(f64::NEG_INFINITY, f64::max);
    let weakest = teams
        .iter()
        .map(|t| t.total_rating)
        .fold(f64::INFINITY, f64::min);
    format!("Rating spread: {spread:.1} (strongest {strongest:.1}, weakest {weakest:.1})")
}

/// Writes the teams to `out`, colored unless `plain` is set.
pub fn render_teams<W: Write>(out: &mut W, teams: &[Team], plain: bool) -> Result<(), AppError> {
    let rule = "─".repeat(RULE_WIDTH);

    for team in teams {
        if plain {
            writeln!(out, "{}", format_team_header(team))?;
            writeln!(out, "{rule}")?;
            for player in &team.players {
                writeln!(out, "{}", format_player_line(player))?;
            }
            writeln!(out)?;
            continue;
        }

        queue!(
            out,
            SetForegroundColor(header_fg()),
            Print(format_team_header(team)),
            Print("\n"),
            SetForegroundColor(rule_fg()),
            Print(&rule),
            Print("\n"),
        )?;
        for player in &team.players {
            let position = player.canonical_position();
            queue!(
                out,
                SetForegroundColor(position_fg(position)),
                Print(pad_to_width(position.tag(), POSITION_COLUMN_WIDTH)),
                SetForegroundColor(text_fg()),
                Print(pad_to_width(&player.name, NAME_COLUMN_WIDTH)),
                SetForegroundColor(rating_fg()),
                Print(format!("{:>4.1}", player.resolved_rating())),
                Print("\n"),
            )?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }

    if plain {
        writeln!(out, "{}", format_summary(teams))?;
    } else {
        queue!(
            out,
            SetForegroundColor(summary_fg()),
            Print(format_summary(teams)),
            ResetColor,
            Print("\n"),
        )?;
    }

    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    teams: &'a [Team],
    rating_spread: f64,
}

/// Serializes the teams and their rating spread as pretty-printed JSON.
pub fn render_json(teams: &[Team]) -> Result<String, AppError> {
    let output = JsonOutput {
        teams,
        rating_spread: rating_spread(teams),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
