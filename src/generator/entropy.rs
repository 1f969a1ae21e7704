//! Rough strength estimate for a password recipe.

use crate::settings::{CaseTransform, Padding, PaddingChar, Separator, Settings};

/// Bits of randomness one generation run draws, given a candidate set.
///
/// `min` and `max` differ when a draw's contribution depends on outcomes:
/// per-character coin flips scale with the drawn word's length, and the
/// adaptive padding character is only drawn when padding actually happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entropy {
    pub min: f64,
    pub max: f64,
}

#[allow(clippy::cast_precision_loss)]
pub(super) fn estimate(candidates: &[String], settings: &Settings) -> Entropy {
    let count = settings.word_count() as f64;

    let word_bits = count * (candidates.len() as f64).log2();

    let (digits_before, digits_after) = settings.digit_padding();
    let digit_bits = ((digits_before + digits_after) as f64) * 10f64.log2();

    let separator_bits = match settings.separator() {
        Separator::Random => (settings.separator_pool().len() as f64).log2(),
        Separator::None | Separator::Fixed(_) => 0.0,
    };

    let mut min = word_bits + digit_bits + separator_bits;
    let mut max = min;

    match settings.case_transform() {
        CaseTransform::Alternate => {
            min += count;
            max += count;
        }
        CaseTransform::Random => {
            let lengths = candidates.iter().map(|word| word.chars().count());

            let shortest = lengths.clone().min().unwrap_or_default() as f64;
            let longest = lengths.max().unwrap_or_default() as f64;

            let coins_min = count * shortest;
            let coins_max = count * longest;

            min += coins_min;
            max += coins_max;
        }
        _ => {}
    }

    // The adaptive padding character is drawn lazily, so it only counts
    // toward the upper bound.
    if settings.padding() == Padding::Adaptive
        && settings.padding_char() == PaddingChar::Random
        && settings.pad_to_length() > 0
    {
        max += (settings.symbol_alphabet().len() as f64).log2();
    }

    Entropy { min, max }
}
