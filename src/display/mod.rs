//! Terminal and JSON output for balanced teams.

pub mod colors;
pub mod render;

pub use render::{
    format_player_line, format_summary, format_team_header, render_json, render_teams,
};
