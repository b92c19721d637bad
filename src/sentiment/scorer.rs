//! Rule-based compound polarity scorer.

use std::collections::HashMap;

use super::PolarityScorer;
use super::lexicon::{BOOSTERS, C_INCR, NEGATIONS, N_SCALAR, VALENCES};

/// Normalization constant for `x / sqrt(x^2 + alpha)`.
const ALPHA: f64 = 15.0;
/// Words inspected before a sentiment word for boosters and negations.
const WINDOW: usize = 3;
/// Weight of each exclamation mark, counted up to four.
const EXCLAIM_INCR: f64 = 0.292;
const MAX_EXCLAIMS: usize = 4;
/// Weight of each question mark when more than one is present, counted up to three.
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

/// Lexicon/heuristic scorer producing a compound score in [-1, 1].
///
/// Each word found in the valence table contributes its valence, adjusted by
/// preceding boosters and negations, ALL-CAPS emphasis, and a "but" contrast.
/// The sum is amplified by trailing punctuation and squashed into [-1, 1].
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Creates a scorer over the embedded tables.
    pub fn new() -> Self {
        Self {
            valences: VALENCES
                .iter()
                .map(|(w, v)| ((*w).to_string(), *v))
                .collect(),
            boosters: BOOSTERS
                .iter()
                .map(|(w, v)| ((*w).to_string(), *v))
                .collect(),
        }
    }

    /// Adds or overrides a word's valence (on the [-4, 4] scale).
    #[must_use]
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.valences.insert(word.to_lowercase(), valence);
        self
    }

    /// Valence of a single word, if it is in the lexicon.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    /// Sum of adjusted word valences before punctuation emphasis and normalization.
    fn raw_sum(&self, tokens: &[Token<'_>]) -> f64 {
        let cap_diff = is_cap_diff(tokens);
        let mut sentiments: Vec<f64> = Vec::with_capacity(tokens.len());

        for (i, tok) in tokens.iter().enumerate() {
            // A booster carries no valence of its own.
            if self.boosters.contains_key(&tok.lower) {
                sentiments.push(0.0);
                continue;
            }
            let Some(mut valence) = self.valences.get(&tok.lower).copied() else {
                sentiments.push(0.0);
                continue;
            };

            if cap_diff && tok.is_upper() {
                valence += C_INCR.copysign(valence);
            }

            for dist in 0..WINDOW {
                let Some(j) = i.checked_sub(dist + 1) else {
                    break;
                };
                let prev = &tokens[j];
                if !self.valences.contains_key(&prev.lower) {
                    let mut s = self.booster_scalar(prev, valence, cap_diff);
                    if dist == 1 {
                        s *= 0.95;
                    } else if dist == 2 {
                        s *= 0.9;
                    }
                    valence += s;
                }
                if is_negation(&prev.lower) {
                    valence *= N_SCALAR;
                }
            }

            sentiments.push(valence);
        }

        if let Some(but) = tokens.iter().position(|t| t.lower == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < but {
                    *s *= 0.5;
                } else if i > but {
                    *s *= 1.5;
                }
            }
        }

        sentiments.iter().sum()
    }

    fn booster_scalar(&self, tok: &Token<'_>, valence: f64, cap_diff: bool) -> f64 {
        let Some(&base) = self.boosters.get(&tok.lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if cap_diff && tok.is_upper() {
            scalar += C_INCR.copysign(valence);
        }
        scalar
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut sum = self.raw_sum(&tokens);
        if sum == 0.0 {
            return 0.0;
        }
        sum += punctuation_emphasis(text).copysign(sum);
        normalize(sum)
    }
}

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    fn is_upper(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
            && !self.raw.chars().any(char::is_lowercase)
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .map(|w| w.trim_matches(|c: char| c == '\'' || c == '-'))
        .filter(|w| !w.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

/// True when some, but not all, alphabetic tokens are ALL-CAPS.
fn is_cap_diff(tokens: &[Token<'_>]) -> bool {
    let alpha: Vec<&Token<'_>> = tokens
        .iter()
        .filter(|t| t.raw.chars().any(char::is_alphabetic))
        .collect();
    let upper = alpha.iter().filter(|t| t.is_upper()).count();
    upper > 0 && upper < alpha.len()
}

fn is_negation(lower: &str) -> bool {
    NEGATIONS.contains(&lower) || lower.ends_with("n't")
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.matches('!').count().min(MAX_EXCLAIMS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclaims as f64 * EXCLAIM_INCR + question_amp
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
