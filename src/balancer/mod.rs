//! Position- and rating-balanced team formation.
//!
//! The pipeline runs strictly forward: labels are normalized to canonical
//! positions, the roster is grouped per position, quotas are computed per
//! group and the greedy assigner places each player. Nothing here performs
//! I/O and every call is independent of the others.

pub mod assigner;
pub mod finalizer;
pub mod models;
pub mod position;
pub mod quota;
pub mod rating;
pub mod separation;

pub use assigner::{balance_teams, balance_teams_with_separation};
pub use finalizer::finalize_teams;
pub use models::{Player, Team, rating_spread};
pub use position::{
    CanonicalPosition, PositionGroup, group_by_position, normalize_position,
    try_normalize_position,
};
pub use quota::{team_quotas, team_quotas_from};
pub use rating::resolve_rating;
pub use separation::{SeparationGroup, name_key};
