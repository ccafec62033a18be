//! Garment Chart Normalizer
//!
//! Size charts arrive either as flat-lay widths or as body circumferences, with
//! nothing in the data saying which. The smallest chest value decides: charts
//! starting at 80cm or above are circumferences and get halved.

use super::size_chart::{SizeChart, SizeDimensions};

/// Minimum chest (cm) at which a chart is read as circumference
pub const CIRCUMFERENCE_THRESHOLD_CM: f64 = 80.0;

/// Minimum flat-lay chest (cm) at which a garment is an oversized cut
pub const OVERSIZED_THRESHOLD_CM: f64 = 55.0;

/// Measurement convention of a supplied chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartUnits {
    /// Garment laid flat, already width
    FlatLay,
    /// Full circumference, twice the flat-lay width
    Circumference,
}

impl ChartUnits {
    pub fn display_text(&self) -> &'static str {
        match self {
            ChartUnits::FlatLay => "flat-lay",
            ChartUnits::Circumference => "circumference",
        }
    }
}

/// Chart converted to flat-lay widths, with the cut classification
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedChart {
    pub chart: SizeChart,
    pub units: ChartUnits,
    pub is_oversized: bool,
}

/// Detect whether a chart lists circumferences or flat-lay widths.
///
/// Charts without any chest value are taken as flat-lay.
pub fn detect_units(chart: &SizeChart) -> ChartUnits {
    match chart.min_chest() {
        Some(min) if min >= CIRCUMFERENCE_THRESHOLD_CM => ChartUnits::Circumference,
        _ => ChartUnits::FlatLay,
    }
}

/// Halve the circumference measurements of one size.
///
/// Shoulder is a span across the back and is never divided; length and arm are
/// linear too.
fn to_flat_lay(dims: &SizeDimensions) -> SizeDimensions {
    SizeDimensions {
        chest: dims.chest.map(|v| v / 2.0),
        waist: dims.waist.map(|v| v / 2.0),
        hips: dims.hips.map(|v| v / 2.0),
        ..*dims
    }
}

/// Normalize a raw chart to flat-lay widths and classify oversized cuts
pub fn normalize_chart(chart: &SizeChart) -> NormalizedChart {
    let units = detect_units(chart);

    let normalized = match units {
        ChartUnits::Circumference => chart.map_dimensions(to_flat_lay),
        ChartUnits::FlatLay => chart.clone(),
    };

    let is_oversized = normalized
        .min_chest()
        .is_some_and(|min| min >= OVERSIZED_THRESHOLD_CM);

    tracing::debug!(
        "Normalized chart: {} sizes, {} units, oversized={}",
        normalized.len(),
        units.display_text(),
        is_oversized
    );

    NormalizedChart {
        chart: normalized,
        units,
        is_oversized,
    }
}
