//! Authenticity estimation logic for Appraise.
//!
//! The scoring here is an acknowledged placeholder: a bounded uniform draw,
//! pushed into a low band when the description mentions counterfeit keywords.
//! There is no inference behind it and none should be read into it.

mod estimator;
mod source;

pub use estimator::{Estimator, SUSPECT_KEYWORDS};
pub use source::{ScoreSource, ThreadRngSource};
