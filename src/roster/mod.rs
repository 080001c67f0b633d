pub mod game_type;
pub mod loader;
pub mod preconditions;

pub use game_type::GameType;
pub use loader::{RosterFormat, ensure_known_positions, load_roster, parse_roster};
pub use preconditions::check_roster;
