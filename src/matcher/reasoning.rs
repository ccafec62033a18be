//! Reasoning Generation
//!
//! Builds the shopper-facing explanation for a recommendation: how sure we
//! are, what the chosen size will feel like, and which adjustments shaped the
//! target.

use crate::chart::{GarmentCategory, SizeDimensions};
use crate::estimator::EstimatedBodyMeasurements;
use crate::fit::FitTarget;
use crate::profile::WearingPreference;
use crate::utils::{format_cm, format_signed_cm};

/// Inputs for one explanation
#[derive(Debug, Clone, Copy)]
pub struct ReasoningContext<'a> {
    pub size: &'a str,
    pub confidence: f64,
    pub preference: WearingPreference,
    pub category: GarmentCategory,
    pub is_oversized: bool,
    pub body: &'a EstimatedBodyMeasurements,
    pub fit_target: &'a FitTarget,
    /// Normalized measurements of the recommended size (None on fallback)
    pub garment: Option<&'a SizeDimensions>,
}

/// Confidence tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchQuality {
    Excellent,
    Good,
    Possible,
    ClosestAvailable,
}

impl MatchQuality {
    pub fn from_confidence(confidence: f64) -> Self {
        match confidence {
            c if c >= 0.85 => MatchQuality::Excellent,
            c if c >= 0.70 => MatchQuality::Good,
            c if c >= 0.55 => MatchQuality::Possible,
            _ => MatchQuality::ClosestAvailable,
        }
    }

    fn headline(&self, size: &str, preference: WearingPreference) -> String {
        let fit = preference.display_text();
        match self {
            MatchQuality::Excellent => format!("Size {} is an excellent match for a {} fit.", size, fit),
            MatchQuality::Good => format!("Size {} should fit well for a {} fit.", size, fit),
            MatchQuality::Possible => format!("Size {} may work for a {} fit.", size, fit),
            MatchQuality::ClosestAvailable => {
                format!("Size {} is the closest available size for a {} fit.", size, fit)
            }
        }
    }
}

/// Ease commentary for bottoms matched on waist and hips
fn bottoms_ease_sentence(waist: f64, hips: f64, body: &EstimatedBodyMeasurements) -> String {
    let ease = (waist - body.waist_width).min(hips - body.hip_width);
    if ease < 2.0 {
        format!(
            "Snug through the waist and hips ({}cm ease), so some stretch helps.",
            format_signed_cm(ease)
        )
    } else if ease > 6.0 {
        format!("Relaxed through the waist and hips with {}cm of room.", format_cm(ease))
    } else {
        format!("Comfortable through the waist and hips with {}cm of ease.", format_cm(ease))
    }
}

/// Ease commentary for garments matched on a single width
fn width_ease_sentence(ease: f64, is_oversized: bool) -> String {
    if is_oversized && ease > 0.0 {
        return format!("Oversized style with {}cm extra room.", format_cm(ease));
    }

    let ease_text = format_signed_cm(ease);
    if ease < -4.0 {
        format!("Very fitted, needs stretch ({}cm ease).", ease_text)
    } else if ease < 0.0 {
        format!("Close fit with slight negative ease ({}cm).", ease_text)
    } else if ease < 3.0 {
        format!("Fitted with minimal ease ({}cm).", ease_text)
    } else if ease < 6.0 {
        format!("Regular fit with comfortable ease ({}cm).", ease_text)
    } else if ease < 10.0 {
        format!("Comfortably loose ({}cm ease).", ease_text)
    } else {
        format!("Relaxed with generous ease ({}cm).", ease_text)
    }
}

fn ease_sentence(ctx: &ReasoningContext<'_>) -> Option<String> {
    let garment = ctx.garment?;

    if ctx.category == GarmentCategory::Bottoms {
        if let Some((waist, hips)) = garment.waist_and_hips() {
            return Some(bottoms_ease_sentence(waist, hips, ctx.body));
        }
    }

    let chest = garment.chest?;
    Some(width_ease_sentence(chest - ctx.fit_target.primary_width, ctx.is_oversized))
}

fn category_note(category: GarmentCategory) -> Option<&'static str> {
    match category {
        GarmentCategory::Outerwear => Some("Includes extra room for layering."),
        GarmentCategory::Dresses => Some("This size fits your proportions well."),
        _ => None,
    }
}

fn body_type_sentence(ctx: &ReasoningContext<'_>) -> Option<String> {
    let adjustment = ctx.fit_target.body_type_adjustment;
    if adjustment == 0.0 {
        return None;
    }
    Some(format!(
        "Adjusted {}cm for your {} build.",
        format_signed_cm(adjustment),
        ctx.body.body_type.display_text()
    ))
}

/// Compose the full explanation
pub fn generate_reasoning(ctx: &ReasoningContext<'_>) -> String {
    let mut parts = Vec::new();

    parts.push(MatchQuality::from_confidence(ctx.confidence).headline(ctx.size, ctx.preference));

    if let Some(sentence) = ease_sentence(ctx) {
        parts.push(sentence);
    }

    if let Some(note) = category_note(ctx.category) {
        parts.push(note.to_string());
    }

    if let Some(sentence) = body_type_sentence(ctx) {
        parts.push(sentence);
    }

    if let Some(note) = &ctx.fit_target.brand_note {
        parts.push(note.clone());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::BodyType;

    fn body(body_type: BodyType) -> EstimatedBodyMeasurements {
        EstimatedBodyMeasurements {
            chest_width: 45.0,
            waist_width: 43.0,
            hip_width: 44.0,
            shoulder_width: 42.0,
            confidence: 0.8,
            body_type,
        }
    }

    fn target(primary: f64, body_adjustment: f64, note: Option<&str>) -> FitTarget {
        FitTarget {
            primary_width: primary,
            ease: 4.0,
            body_type_adjustment: body_adjustment,
            brand_note: note.map(str::to_string),
            target_width: primary + 4.0 + body_adjustment,
        }
    }

    #[test]
    fn test_match_quality_tiers() {
        assert_eq!(MatchQuality::from_confidence(0.9), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_confidence(0.72), MatchQuality::Good);
        assert_eq!(MatchQuality::from_confidence(0.55), MatchQuality::Possible);
        assert_eq!(MatchQuality::from_confidence(0.5), MatchQuality::ClosestAvailable);
    }

    #[test]
    fn test_top_reasoning_with_body_type() {
        let b = body(BodyType::Apple);
        let fit = target(45.0, 1.0, None);
        let garment = SizeDimensions::with_chest(52.0);
        let text = generate_reasoning(&ReasoningContext {
            size: "L",
            confidence: 0.72,
            preference: WearingPreference::Normal,
            category: GarmentCategory::Tops,
            is_oversized: false,
            body: &b,
            fit_target: &fit,
            garment: Some(&garment),
        });
        assert_eq!(
            text,
            "Size L should fit well for a regular fit. Comfortably loose (+7cm ease). \
             Adjusted +1cm for your apple build."
        );
    }

    #[test]
    fn test_body_type_clause_omitted_without_adjustment() {
        let b = body(BodyType::Apple);
        let fit = target(44.0, 0.0, Some("Loomcraft runs large, so we aimed 2cm closer."));
        let garment = SizeDimensions {
            waist: Some(46.0),
            hips: Some(48.0),
            ..SizeDimensions::default()
        };
        let text = generate_reasoning(&ReasoningContext {
            size: "32",
            confidence: 0.9,
            preference: WearingPreference::Loose,
            category: GarmentCategory::Bottoms,
            is_oversized: false,
            body: &b,
            fit_target: &fit,
            garment: Some(&garment),
        });
        assert!(text.starts_with("Size 32 is an excellent match for a relaxed fit."));
        // min(46 - 43, 48 - 44) = 3
        assert!(text.contains("Comfortable through the waist and hips with 3cm of ease."));
        assert!(!text.contains("build"));
        assert!(text.ends_with("Loomcraft runs large, so we aimed 2cm closer."));
    }

    #[test]
    fn test_oversized_and_outerwear_notes() {
        let b = body(BodyType::Rectangle);
        let fit = target(45.0, 0.0, None);
        let garment = SizeDimensions::with_chest(60.0);
        let text = generate_reasoning(&ReasoningContext {
            size: "M",
            confidence: 0.6,
            preference: WearingPreference::Normal,
            category: GarmentCategory::Outerwear,
            is_oversized: true,
            body: &b,
            fit_target: &fit,
            garment: Some(&garment),
        });
        assert_eq!(
            text,
            "Size M may work for a regular fit. Oversized style with 15cm extra room. \
             Includes extra room for layering."
        );
    }

    #[test]
    fn test_width_ease_bands() {
        assert!(width_ease_sentence(-5.1, false).starts_with("Very fitted, needs stretch (-5.1cm"));
        assert!(width_ease_sentence(-1.0, false).starts_with("Close fit"));
        assert!(width_ease_sentence(2.0, false).starts_with("Fitted with minimal ease"));
        assert!(width_ease_sentence(4.0, false).starts_with("Regular fit"));
        assert!(width_ease_sentence(12.0, false).starts_with("Relaxed with generous ease"));
    }

    #[test]
    fn test_oversized_without_room_uses_fitted_bands() {
        let tight = width_ease_sentence(-5.0, true);
        assert!(tight.starts_with("Close fit with slight negative ease (-5cm)"));
        assert!(!tight.contains("Oversized"));
        assert!(width_ease_sentence(-6.0, true).starts_with("Very fitted"));
        assert!(width_ease_sentence(0.0, true).starts_with("Fitted with minimal ease"));
        assert_eq!(width_ease_sentence(8.0, true), "Oversized style with 8cm extra room.");
    }

    #[test]
    fn test_fallback_has_no_ease_sentence() {
        let b = body(BodyType::Rectangle);
        let fit = target(45.0, 0.0, None);
        let text = generate_reasoning(&ReasoningContext {
            size: "M",
            confidence: 0.5,
            preference: WearingPreference::Fitted,
            category: GarmentCategory::Dresses,
            is_oversized: false,
            body: &b,
            fit_target: &fit,
            garment: None,
        });
        assert_eq!(
            text,
            "Size M is the closest available size for a fitted fit. This size fits your proportions well."
        );
    }
}
