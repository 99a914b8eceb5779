//! Session business logic: count choice, selection, scheduling, scores, ranking.

mod ranking;
mod schedule;
mod scores;
mod selection;

pub use ranking::{bottom_four_start, compute_ranking, show_ranking, COUNTED_MATCHES_PER_PLAYER};
pub use schedule::{generate_matches, resolve_matches, schedule_for};
pub use scores::set_match_score;
pub use selection::{choose_player_count, toggle_player};
