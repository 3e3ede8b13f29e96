//! Scoring: scene features to severities, severities to a rating.
//!
//! 1. Feature extraction (weighted counts, context signals)
//! 2. Threshold normalization with context modifiers
//! 3. Scene-weighted aggregation
//! 4. Decision-table rating
//! 5. Optional reviewer corrections on the aggregate

mod aggregate;
mod corrections;
mod features;
mod mapper;
mod normalize;

pub use aggregate::{SceneScoreVector, aggregate};
pub use corrections::{Adjustment, apply_corrections};
pub use features::{SceneFeatures, extract_features};
pub use mapper::{NO_THRESHOLD_REASON, RatingDecision, map_rating};
pub use normalize::{LONG_SCENE_WORDS, ScoreNormalizer, normalize, threshold_severity};
