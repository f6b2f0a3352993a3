//! Lancer profile matching
//!
//! Loads freelancer profiles from CSV, embeds them, and ranks them against a
//! project description by cosine similarity.

mod engine;
mod loader;
mod profile;
mod similarity;

pub use engine::{MatchOptions, ProfileMatcher};
pub use loader::{load_profiles, parse_profiles};
pub use profile::{Profile, ScoredMatch};
pub use similarity::cosine_similarity;
