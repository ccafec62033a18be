//! Size Chart
//!
//! Per-product mapping from size label to garment measurements. Entry order is
//! the order the chart was supplied in, which the matcher's fallbacks rely on.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Garment measurements for one size (cm). Units are ambiguous until normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder: Option<f64>,
}

impl SizeDimensions {
    pub fn with_chest(chest: f64) -> Self {
        Self {
            chest: Some(chest),
            ..Self::default()
        }
    }

    /// Waist and hips together, the pair bottoms are matched on
    pub fn waist_and_hips(&self) -> Option<(f64, f64)> {
        match (self.waist, self.hips) {
            (Some(waist), Some(hips)) => Some((waist, hips)),
            _ => None,
        }
    }
}

/// Ordered size chart
#[derive(Debug, Clone, Default)]
pub struct SizeChart {
    entries: Vec<(String, SizeDimensions)>,
    /// Label -> position in `entries`
    index: FxHashMap<String, usize>,
}

impl PartialEq for SizeChart {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl SizeChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert or replace a size. Replacing keeps the original position.
    pub fn insert(&mut self, label: impl Into<String>, dims: SizeDimensions) {
        let label = label.into();
        match self.index.get(&label) {
            Some(&position) => self.entries[position].1 = dims,
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, dims));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&SizeDimensions> {
        self.index
            .get(label)
            .and_then(|&position| self.entries.get(position))
            .map(|(_, dims)| dims)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SizeDimensions)> {
        self.entries.iter().map(|(label, dims)| (label.as_str(), dims))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<(&str, &SizeDimensions)> {
        self.entries.first().map(|(label, dims)| (label.as_str(), dims))
    }

    /// Smallest defined chest value, None if no size lists a chest
    pub fn min_chest(&self) -> Option<f64> {
        self.entries
            .iter()
            .filter_map(|(_, dims)| dims.chest)
            .fold(None, |min, chest| match min {
                Some(m) if m <= chest => Some(m),
                _ => Some(chest),
            })
    }

    /// Label in the middle of the chart, used when no size can be scored
    pub fn middle_label(&self) -> Option<&str> {
        self.entries
            .get(self.entries.len() / 2)
            .map(|(label, _)| label.as_str())
    }

    /// Apply `f` to every entry, keeping labels and order
    pub fn map_dimensions<F>(&self, f: F) -> SizeChart
    where
        F: Fn(&SizeDimensions) -> SizeDimensions,
    {
        SizeChart {
            entries: self
                .entries
                .iter()
                .map(|(label, dims)| (label.clone(), f(dims)))
                .collect(),
            index: self.index.clone(),
        }
    }
}

impl<L: Into<String>> FromIterator<(L, SizeDimensions)> for SizeChart {
    fn from_iter<T: IntoIterator<Item = (L, SizeDimensions)>>(iter: T) -> Self {
        let mut chart = SizeChart::new();
        for (label, dims) in iter {
            chart.insert(label, dims);
        }
        chart
    }
}

// ============================================================================
// Serde (JSON object, order preserved)
// ============================================================================

impl Serialize for SizeChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, dims) in &self.entries {
            map.serialize_entry(label, dims)?;
        }
        map.end()
    }
}

struct SizeChartVisitor;

impl<'de> Visitor<'de> for SizeChartVisitor {
    type Value = SizeChart;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping size labels to measurements")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        // size_hint comes from the document; cap the preallocation
        let mut chart = SizeChart::with_capacity(access.size_hint().unwrap_or(0).min(256));
        while let Some((label, dims)) = access.next_entry::<String, SizeDimensions>()? {
            chart.insert(label, dims);
        }
        Ok(chart)
    }
}

impl<'de> Deserialize<'de> for SizeChart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SizeChartVisitor)
    }
}
