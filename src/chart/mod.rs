//! Size Charts
//!
//! Per-product size chart model plus the two pieces of inference the engine
//! makes about a chart before matching against it.
//!
//! ## Architecture
//! - `size_chart.rs` - Ordered SizeChart + SizeDimensions (serde)
//! - `normalizer.rs` - Flat-lay vs circumference detection, oversized detection
//! - `category.rs` - Garment category from product type, tags, or chart shape

pub mod size_chart;
pub mod normalizer;
pub mod category;

pub use size_chart::{SizeChart, SizeDimensions};
pub use normalizer::{normalize_chart, detect_units, ChartUnits, NormalizedChart};
pub use category::{detect_category, GarmentCategory};
