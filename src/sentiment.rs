//! Lexicon-based polarity scoring.
//!
//! Assigns VADER-convention scores to plain text: a `compound` value in
//! [-1, 1] plus `neg`/`neu`/`pos` proportions that sum to 1.0. Word lists
//! carry valences on the usual -4..+4 scale; a small negation window and
//! booster adjustment handle the most common contextual shifts.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Normalization constant for the compound score (sum / sqrt(sum^2 + alpha)).
const NORMALIZATION_ALPHA: f64 = 15.0;
/// A negated sentiment word keeps a damped, inverted share of its valence.
const NEGATION_FACTOR: f64 = -0.74;

static NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "cannot", "cant",
    "dont", "doesnt", "didnt", "isnt", "wasnt", "wont", "wouldnt",
    "shouldnt", "couldnt", "aint", "hardly", "rarely", "without",
];

// Degree modifiers shift the magnitude of the word that follows them.
static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for word in [
        "very", "extremely", "incredibly", "absolutely", "completely",
        "really", "so", "totally", "utterly", "highly", "especially",
        "remarkably", "truly",
    ] {
        map.insert(word, 0.293);
    }
    for word in [
        "slightly", "somewhat", "barely", "marginally", "kinda", "almost",
        "partly", "scarcely", "sort", "little",
    ] {
        map.insert(word, -0.293);
    }
    map
});

/// Word valences on the -4..+4 scale.
static LEXICON_ENTRIES: &[(&str, f64)] = &[
    // Positive
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("excellent", 2.7),
    ("great", 3.1),
    ("good", 1.9),
    ("best", 3.2),
    ("better", 1.9),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("superb", 3.1),
    ("outstanding", 3.1),
    ("brilliant", 2.8),
    ("perfect", 2.7),
    ("beautiful", 2.9),
    ("happy", 2.7),
    ("joy", 2.8),
    ("delightful", 2.8),
    ("pleasant", 2.3),
    ("satisfied", 2.0),
    ("satisfying", 2.2),
    ("impressive", 2.3),
    ("exceptional", 2.7),
    ("remarkable", 2.2),
    ("success", 2.7),
    ("successful", 2.4),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.4),
    ("helpful", 1.9),
    ("reliable", 1.6),
    ("valuable", 2.1),
    ("beneficial", 1.9),
    ("favorable", 1.9),
    ("recommend", 1.6),
    ("recommended", 1.7),
    ("like", 1.5),
    ("liked", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("glad", 2.0),
    ("grateful", 2.4),
    ("thank", 1.7),
    ("thanks", 1.9),
    ("nice", 1.8),
    ("fine", 0.8),
    ("interesting", 1.7),
    ("improved", 1.9),
    ("improvement", 1.4),
    ("gain", 1.6),
    ("profit", 2.0),
    ("growth", 1.6),
    ("strong", 1.3),
    ("positive", 2.3),
    ("optimistic", 1.7),
    ("confident", 2.2),
    ("secure", 1.4),
    ("safe", 1.6),
    ("easy", 1.8),
    ("fun", 2.3),
    ("fresh", 1.3),
    ("smart", 1.7),
    ("solid", 1.5),
    // Negative
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("bad", -2.5),
    ("worst", -3.1),
    ("worse", -2.1),
    ("poor", -2.3),
    ("disappointing", -2.2),
    ("disappointed", -2.3),
    ("failure", -2.4),
    ("failed", -2.3),
    ("fail", -2.5),
    ("fails", -1.9),
    ("negative", -1.8),
    ("sad", -2.1),
    ("unhappy", -1.8),
    ("angry", -2.7),
    ("annoyed", -1.8),
    ("annoying", -2.0),
    ("frustrated", -2.1),
    ("frustrating", -1.9),
    ("problem", -1.7),
    ("problems", -1.7),
    ("issue", -1.1),
    ("issues", -1.3),
    ("broken", -1.9),
    ("crash", -1.6),
    ("crashed", -1.7),
    ("error", -1.7),
    ("errors", -1.6),
    ("mistake", -1.6),
    ("mistakes", -1.7),
    ("wrong", -2.1),
    ("useless", -1.8),
    ("waste", -1.8),
    ("scam", -2.6),
    ("fraud", -2.9),
    ("fake", -1.9),
    ("unreliable", -1.6),
    ("slow", -1.2),
    ("difficult", -1.5),
    ("confusing", -1.3),
    ("expensive", -0.9),
    ("overpriced", -1.6),
    ("worthless", -2.7),
    ("garbage", -2.2),
    ("trash", -2.2),
    ("pathetic", -2.6),
    ("mediocre", -0.8),
    ("inferior", -1.9),
    ("loss", -1.3),
    ("losses", -1.6),
    ("decline", -1.4),
    ("risk", -1.1),
    ("crisis", -3.1),
    ("disaster", -3.1),
    ("danger", -2.4),
    ("dangerous", -2.3),
    ("threat", -1.9),
    ("fear", -2.2),
    ("afraid", -2.2),
    ("worry", -1.9),
    ("worried", -1.9),
    ("doubt", -1.5),
    ("weak", -1.9),
    ("ugly", -2.3),
    ("boring", -1.3),
    ("hurt", -2.4),
    ("pain", -2.3),
    ("painful", -2.4),
    ("lie", -1.8),
    ("lies", -1.8),
    ("lying", -2.4),
];

/// Polarity scores for one piece of text.
///
/// `neg`/`neu`/`pos` are proportions in [0, 1] summing to 1.0 for any
/// non-empty input; `compound` is the normalized aggregate in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    fn zero() -> Self {
        PolarityScores {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

/// Lexicon-based sentiment scorer.
///
/// Built once at startup and shared by reference; scoring itself is a pure
/// function of the input text.
pub struct SentimentIntensityAnalyzer {
    lexicon: HashMap<&'static str, f64>,
}

impl Default for SentimentIntensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentIntensityAnalyzer {
    pub fn new() -> Self {
        SentimentIntensityAnalyzer {
            lexicon: LEXICON_ENTRIES.iter().copied().collect(),
        }
    }

    /// Score `text`, returning compound plus neg/neu/pos proportions.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| w.len() > 1)
            .collect();

        if tokens.is_empty() {
            return PolarityScores::zero();
        }

        let valences: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.token_valence(&tokens, i, token))
            .collect();

        let sum: f64 = valences.iter().sum();
        let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

        // Proportional split: each hit contributes its magnitude plus one,
        // every non-lexicon token counts toward neutral.
        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for &v in &valences {
            if v > 0.0 {
                pos_sum += v + 1.0;
            } else if v < 0.0 {
                neg_sum += v.abs() + 1.0;
            } else {
                neu_count += 1.0;
            }
        }

        let total = pos_sum + neg_sum + neu_count;
        if total <= 0.0 {
            return PolarityScores::zero();
        }

        PolarityScores {
            neg: round3(neg_sum / total),
            neu: round3(neu_count / total),
            pos: round3(pos_sum / total),
            compound: round3(compound),
        }
    }

    fn token_valence(&self, tokens: &[&str], index: usize, token: &str) -> f64 {
        let Some(&base) = self.lexicon.get(token) else {
            return 0.0;
        };

        let mut valence = base;

        // Degree modifier directly before the hit.
        if index > 0 {
            if let Some(&boost) = BOOSTERS.get(tokens[index - 1]) {
                valence += boost * base.signum();
            }
        }

        // Negation anywhere in the preceding 3-token window.
        let window_start = index.saturating_sub(3);
        if tokens[window_start..index]
            .iter()
            .any(|t| NEGATIONS.contains(t))
        {
            valence *= NEGATION_FACTOR;
        }

        valence
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
