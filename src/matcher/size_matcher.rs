//! Size Matcher
//!
//! Scans a normalized chart for the sizes closest to the target width. Bottoms
//! with both waist and hips listed must clear the body's waist and hip widths
//! (within a 5cm negative-ease tolerance) before they are scored at all.

use crate::chart::{GarmentCategory, SizeChart, SizeDimensions};
use crate::estimator::EstimatedBodyMeasurements;

/// How far below the body a bottoms waist or hip may sit (stretch allowance)
pub const BOTTOMS_TOLERANCE_CM: f64 = 5.0;

/// A second size closer than this to the best diff is offered as an alternative
pub const ALTERNATIVE_DIFF_WINDOW_CM: f64 = 1.5;

/// Label used when the chart has no sizes at all
const DEFAULT_SIZE: &str = "M";

/// The measurement a size is matched on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeFit {
    /// Comparable garment width (flat-lay cm)
    Measured(f64),
    /// Bottoms size whose waist or hips is too small for the body
    TooTight,
    /// Nothing usable for this category
    NoData,
}

/// Resolve the garment width a size is scored on
pub fn measure_size(
    dims: &SizeDimensions,
    category: GarmentCategory,
    body: &EstimatedBodyMeasurements,
) -> SizeFit {
    if category == GarmentCategory::Bottoms {
        if let Some((waist, hips)) = dims.waist_and_hips() {
            let fits_waist = waist >= body.waist_width - BOTTOMS_TOLERANCE_CM;
            let fits_hips = hips >= body.hip_width - BOTTOMS_TOLERANCE_CM;
            return if fits_waist && fits_hips {
                SizeFit::Measured(waist.min(hips))
            } else {
                SizeFit::TooTight
            };
        }
    }

    match dims.chest {
        Some(chest) => SizeFit::Measured(chest),
        None => SizeFit::NoData,
    }
}

/// One scored chart size
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSize {
    pub label: String,
    pub measurement: f64,
    /// Absolute distance to the target width
    pub diff: f64,
}

/// Result of matching a chart against a target width
#[derive(Debug, Clone, PartialEq)]
pub struct SizeMatch {
    /// Recommended label (always a chart label unless the chart is empty)
    pub size: String,
    /// None when no size could be scored and a fallback label was used
    pub best: Option<ScoredSize>,
    pub second_best: Option<ScoredSize>,
}

impl SizeMatch {
    pub fn is_fallback(&self) -> bool {
        self.best.is_none()
    }

    pub fn measurement_diff(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.diff)
    }

    /// Second-best size when it is nearly as close as the best
    pub fn alternative_size(&self) -> Option<&str> {
        match (&self.best, &self.second_best) {
            (Some(best), Some(second)) if second.diff - best.diff <= ALTERNATIVE_DIFF_WINDOW_CM => {
                Some(second.label.as_str())
            }
            _ => None,
        }
    }
}

/// Find the best and second-best sizes for a target width.
///
/// Ties keep the earlier chart entry. With nothing scorable, the middle label
/// of the chart is returned.
pub fn match_size(
    chart: &SizeChart,
    target_width: f64,
    category: GarmentCategory,
    body: &EstimatedBodyMeasurements,
) -> SizeMatch {
    let mut best: Option<ScoredSize> = None;
    let mut second_best: Option<ScoredSize> = None;

    for (label, dims) in chart.iter() {
        let measurement = match measure_size(dims, category, body) {
            SizeFit::Measured(value) => value,
            SizeFit::TooTight | SizeFit::NoData => continue,
        };

        let scored = ScoredSize {
            label: label.to_string(),
            measurement,
            diff: (measurement - target_width).abs(),
        };

        let beats_best = best.as_ref().map_or(true, |current| scored.diff < current.diff);
        if beats_best {
            second_best = best.replace(scored);
        } else if second_best.as_ref().map_or(true, |second| scored.diff < second.diff) {
            second_best = Some(scored);
        }
    }

    let size = match &best {
        Some(scored) => scored.label.clone(),
        None => chart.middle_label().unwrap_or(DEFAULT_SIZE).to_string(),
    };

    SizeMatch {
        size,
        best,
        second_best,
    }
}
