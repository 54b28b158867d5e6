//! Scoring engine
//! Role profiles, term matching, contact/section signals and the weighted scorer

pub mod matcher;
pub mod roles;
pub mod scorer;
pub mod signals;

pub use roles::{all_profiles, get_profile, RoleProfile};
pub use scorer::{analyze, analyze_with_profile, ScoreReport};
pub use signals::{ContactSignals, SectionSignals};
