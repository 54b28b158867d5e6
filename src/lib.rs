//! ATS analyzer library
//!
//! Scores resume text against fixed AI/ML job-role profiles. The scoring
//! engine in [`processing`] is pure; [`input`] and [`output`] wrap it with
//! file extraction and report rendering.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsError, Result};
pub use processing::{analyze, get_profile, RoleProfile, ScoreReport};
