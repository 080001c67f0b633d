use crate::balancer::CanonicalPosition;
use crossterm::style::Color;

pub fn header_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn rule_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn rating_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn summary_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green

/// Color of the position tag column, grouped by line of the pitch
pub fn position_fg(position: CanonicalPosition) -> Color {
    match position {
        CanonicalPosition::Goalkeeper => Color::AnsiValue(201), // Bright magenta
        CanonicalPosition::CenterBack
        | CanonicalPosition::RightBack
        | CanonicalPosition::LeftBack => Color::AnsiValue(39), // Sky blue
        CanonicalPosition::DefensiveMid | CanonicalPosition::Mid => Color::AnsiValue(46),
        CanonicalPosition::Forward => Color::AnsiValue(208), // Orange
    }
}
