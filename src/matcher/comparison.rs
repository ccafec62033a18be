//! Size Comparison Table
//!
//! Describes how every size in the chart would fit, using the same eligibility
//! rules as the matcher. Oversized cuts are described relative to the intended
//! oversized look rather than to the body.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::size_matcher::{measure_size, SizeFit};
use crate::chart::{GarmentCategory, SizeChart};
use crate::estimator::EstimatedBodyMeasurements;

/// Fit of one size relative to the target width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitDescriptor {
    // Oversized cuts
    FittedLessOversized,
    SlightlyLessOversized,
    StandardOversized,
    SlightlyMoreOversized,
    ExtraOversized,

    // Regular cuts
    VeryTight,
    Snug,
    Comfortable,
    SlightlyLoose,
    TooLoose,

    TooTightWaistOrHips,
    NoData,
}

impl FitDescriptor {
    pub fn display_text(&self) -> &'static str {
        match self {
            FitDescriptor::FittedLessOversized => "Fitted (less oversized)",
            FitDescriptor::SlightlyLessOversized => "Slightly less oversized",
            FitDescriptor::StandardOversized => "Standard oversized",
            FitDescriptor::SlightlyMoreOversized => "Slightly more oversized",
            FitDescriptor::ExtraOversized => "Extra oversized",
            FitDescriptor::VeryTight => "Very tight - needs stretch",
            FitDescriptor::Snug => "Snug fit",
            FitDescriptor::Comfortable => "Comfortable fit",
            FitDescriptor::SlightlyLoose => "Slightly loose",
            FitDescriptor::TooLoose => "Too loose",
            FitDescriptor::TooTightWaistOrHips => "Too tight (waist or hips)",
            FitDescriptor::NoData => "No data",
        }
    }

    /// Classify a signed difference (garment - target, cm)
    pub fn from_difference(difference: f64, is_oversized: bool) -> Self {
        if is_oversized {
            if difference < -4.0 {
                FitDescriptor::FittedLessOversized
            } else if difference < -1.5 {
                FitDescriptor::SlightlyLessOversized
            } else if difference <= 1.5 {
                FitDescriptor::StandardOversized
            } else if difference <= 4.0 {
                FitDescriptor::SlightlyMoreOversized
            } else {
                FitDescriptor::ExtraOversized
            }
        } else if difference < -4.0 {
            FitDescriptor::VeryTight
        } else if difference < -1.5 {
            FitDescriptor::Snug
        } else if difference <= 1.5 {
            FitDescriptor::Comfortable
        } else if difference <= 4.0 {
            FitDescriptor::SlightlyLoose
        } else {
            FitDescriptor::TooLoose
        }
    }
}

impl Serialize for FitDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_text())
    }
}

/// Descriptor for every chart size, in chart order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeComparison {
    entries: Vec<(String, FitDescriptor)>,
}

impl SizeComparison {
    pub fn get(&self, label: &str) -> Option<FitDescriptor> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, descriptor)| *descriptor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FitDescriptor)> {
        self.entries.iter().map(|(label, d)| (label.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SizeComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, descriptor) in &self.entries {
            map.serialize_entry(label, descriptor)?;
        }
        map.end()
    }
}

/// Describe the fit of every size in a normalized chart
pub fn compare_sizes(
    chart: &SizeChart,
    target_width: f64,
    category: GarmentCategory,
    body: &EstimatedBodyMeasurements,
    is_oversized: bool,
) -> SizeComparison {
    let entries = chart
        .iter()
        .map(|(label, dims)| {
            let descriptor = match measure_size(dims, category, body) {
                SizeFit::Measured(value) => {
                    FitDescriptor::from_difference(value - target_width, is_oversized)
                }
                SizeFit::TooTight => FitDescriptor::TooTightWaistOrHips,
                SizeFit::NoData => FitDescriptor::NoData,
            };
            (label.to_string(), descriptor)
        })
        .collect();

    SizeComparison { entries }
}
