//! Size Matching and Explanation
//!
//! ## Architecture
//! - `size_matcher.rs` - Best/second-best size search, bottoms eligibility
//! - `confidence.rs` - Confidence score from diff, inputs and body estimate
//! - `comparison.rs` - Per-size fit descriptors
//! - `reasoning.rs` - Natural-language explanation

pub mod size_matcher;
pub mod confidence;
pub mod comparison;
pub mod reasoning;

pub use size_matcher::{match_size, measure_size, ScoredSize, SizeFit, SizeMatch};
pub use confidence::{calculate_confidence, ConfidenceInputs};
pub use comparison::{compare_sizes, FitDescriptor, SizeComparison};
pub use reasoning::{generate_reasoning, MatchQuality, ReasoningContext};
