//! Threshold rules turning polarity scores into named categories.
//!
//! Two classification modes exist and deliberately do not share a rule:
//! simple mode labels from the compound score, extended mode relabels the
//! raw proportions and labels from their relative order. Both are pure
//! functions of their inputs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::sentiment::PolarityScores;

/// Which set of categories a deployment reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationMode {
    #[default]
    Simple,
    Extended,
}

impl std::str::FromStr for ClassificationMode {
    type Err = UnknownModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "simple" => Ok(ClassificationMode::Simple),
            "extended" => Ok(ClassificationMode::Extended),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown classification mode: {0} (expected \"simple\" or \"extended\")")]
pub struct UnknownModeError(String);

/// Overall sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

/// Simple-mode categories: the raw scores plus one overall label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SimpleCategories {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
}

/// Extended-mode categories: relabeled scores, three binary indicators,
/// and one overall label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ExtendedCategories {
    #[serde(rename = "Negative")]
    pub negative: f64,
    #[serde(rename = "Positive")]
    pub positive: f64,
    #[serde(rename = "Uncertainty")]
    pub uncertainty: f64,
    #[serde(rename = "Litigious")]
    pub litigious: f64,
    #[serde(rename = "StrongModal")]
    pub strong_modal: f64,
    #[serde(rename = "WeakModal")]
    pub weak_modal: f64,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
}

/// Categories for one request, tagged by mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CategoryResult {
    Simple(SimpleCategories),
    Extended(ExtendedCategories),
}

impl CategoryResult {
    pub fn sentiment(&self) -> Sentiment {
        match self {
            CategoryResult::Simple(c) => c.sentiment,
            CategoryResult::Extended(c) => c.sentiment,
        }
    }
}

/// Apply the threshold rules for `mode` to a set of polarity scores.
pub fn classify(scores: PolarityScores, mode: ClassificationMode) -> CategoryResult {
    match mode {
        ClassificationMode::Simple => CategoryResult::Simple(classify_simple(scores)),
        ClassificationMode::Extended => CategoryResult::Extended(classify_extended(scores)),
    }
}

fn classify_simple(scores: PolarityScores) -> SimpleCategories {
    // Inclusive at both boundaries: exactly +/-0.05 takes the named label.
    let sentiment = if scores.compound >= 0.05 {
        Sentiment::Positive
    } else if scores.compound <= -0.05 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    SimpleCategories {
        neg: scores.neg,
        neu: scores.neu,
        pos: scores.pos,
        compound: scores.compound,
        sentiment,
    }
}

fn classify_extended(scores: PolarityScores) -> ExtendedCategories {
    // Independent range checks. Strict on the outer indicators, inclusive
    // on WeakModal, so +/-0.5 land in WeakModal and the three ranges
    // partition the compound line.
    let litigious = if scores.compound > 0.5 { 1.0 } else { 0.0 };
    let strong_modal = if scores.compound < -0.5 { 1.0 } else { 0.0 };
    let weak_modal = if (-0.5..=0.5).contains(&scores.compound) {
        1.0
    } else {
        0.0
    };

    // Label comes from the relabeled proportions, never from compound.
    let sentiment = if scores.pos > scores.neg {
        Sentiment::Positive
    } else if scores.neg > scores.pos {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    ExtendedCategories {
        negative: scores.neg,
        positive: scores.pos,
        uncertainty: scores.neu,
        litigious,
        strong_modal,
        weak_modal,
        sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(neg: f64, neu: f64, pos: f64, compound: f64) -> PolarityScores {
        PolarityScores {
            neg,
            neu,
            pos,
            compound,
        }
    }

    fn simple(compound: f64) -> SimpleCategories {
        match classify(scores(0.1, 0.8, 0.1, compound), ClassificationMode::Simple) {
            CategoryResult::Simple(c) => c,
            other => panic!("expected simple categories, got {:?}", other),
        }
    }

    fn extended(s: PolarityScores) -> ExtendedCategories {
        match classify(s, ClassificationMode::Extended) {
            CategoryResult::Extended(c) => c,
            other => panic!("expected extended categories, got {:?}", other),
        }
    }

    #[test]
    fn simple_label_partitions_the_compound_line() {
        assert_eq!(simple(0.85).sentiment, Sentiment::Positive);
        assert_eq!(simple(0.05).sentiment, Sentiment::Positive);
        assert_eq!(simple(0.049).sentiment, Sentiment::Neutral);
        assert_eq!(simple(0.0).sentiment, Sentiment::Neutral);
        assert_eq!(simple(-0.049).sentiment, Sentiment::Neutral);
        assert_eq!(simple(-0.05).sentiment, Sentiment::Negative);
        assert_eq!(simple(-0.85).sentiment, Sentiment::Negative);
    }

    #[test]
    fn simple_copies_raw_scores_unchanged() {
        let c = simple(0.3);
        assert_eq!(c.neg, 0.1);
        assert_eq!(c.neu, 0.8);
        assert_eq!(c.pos, 0.1);
        assert_eq!(c.compound, 0.3);
    }

    #[test]
    fn exactly_one_indicator_fires_for_any_compound() {
        for compound in [-1.0, -0.75, -0.501, -0.5, -0.1, 0.0, 0.1, 0.5, 0.501, 0.75, 1.0] {
            let c = extended(scores(0.2, 0.6, 0.2, compound));
            let fired = c.litigious + c.strong_modal + c.weak_modal;
            assert_eq!(fired, 1.0, "compound = {}", compound);
        }
    }

    #[test]
    fn boundary_compound_falls_into_weak_modal() {
        for compound in [-0.5, 0.5] {
            let c = extended(scores(0.2, 0.6, 0.2, compound));
            assert_eq!(c.weak_modal, 1.0, "compound = {}", compound);
            assert_eq!(c.litigious, 0.0);
            assert_eq!(c.strong_modal, 0.0);
        }
    }

    #[test]
    fn strict_thresholds_select_outer_indicators() {
        let high = extended(scores(0.0, 0.3, 0.7, 0.85));
        assert_eq!(high.litigious, 1.0);
        assert_eq!(high.weak_modal, 0.0);

        let low = extended(scores(0.7, 0.3, 0.0, -0.85));
        assert_eq!(low.strong_modal, 1.0);
        assert_eq!(low.weak_modal, 0.0);
    }

    #[test]
    fn extended_label_uses_proportions_not_compound() {
        // Positive proportion wins even with a negative compound.
        let c = extended(scores(0.1, 0.5, 0.4, -0.3));
        assert_eq!(c.sentiment, Sentiment::Positive);

        // Tie resolves to Neutral regardless of compound sign.
        let tie_pos = extended(scores(0.25, 0.5, 0.25, 0.9));
        let tie_neg = extended(scores(0.25, 0.5, 0.25, -0.9));
        assert_eq!(tie_pos.sentiment, Sentiment::Neutral);
        assert_eq!(tie_neg.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn extended_relabels_raw_scores() {
        let c = extended(scores(0.3, 0.5, 0.2, 0.0));
        assert_eq!(c.negative, 0.3);
        assert_eq!(c.uncertainty, 0.5);
        assert_eq!(c.positive, 0.2);
    }

    #[test]
    fn classification_is_idempotent() {
        let s = scores(0.2, 0.5, 0.3, 0.42);
        for mode in [ClassificationMode::Simple, ClassificationMode::Extended] {
            assert_eq!(classify(s, mode), classify(s, mode));
        }
    }

    #[test]
    fn serialization_uses_observed_key_names() {
        let simple_json =
            serde_json::to_value(classify(scores(0.0, 0.3, 0.7, 0.85), ClassificationMode::Simple))
                .unwrap();
        assert_eq!(simple_json["Sentiment"], "Positive");
        assert_eq!(simple_json["compound"], 0.85);

        let extended_json = serde_json::to_value(classify(
            scores(0.0, 0.3, 0.7, 0.85),
            ClassificationMode::Extended,
        ))
        .unwrap();
        assert_eq!(extended_json["Litigious"], 1.0);
        assert_eq!(extended_json["StrongModal"], 0.0);
        assert_eq!(extended_json["WeakModal"], 0.0);
        assert_eq!(extended_json["Uncertainty"], 0.3);
        assert_eq!(extended_json["Sentiment"], "Positive");
    }

    #[test]
    fn mode_parses_from_deployment_config() {
        assert_eq!(
            "extended".parse::<ClassificationMode>().unwrap(),
            ClassificationMode::Extended
        );
        assert_eq!(
            "Simple".parse::<ClassificationMode>().unwrap(),
            ClassificationMode::Simple
        );
        assert!("vibes".parse::<ClassificationMode>().is_err());
    }
}
