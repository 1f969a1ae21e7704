//! Per-word case transformation and character substitution.

use indexmap::IndexMap;
use rand::Rng;

use crate::settings::CaseTransform;

/// Cases each word and then runs every substitution rule over it.
///
/// Substitutions run regardless of the transform, including
/// [`CaseTransform::None`]; only the casing step itself is skipped then.
pub(super) fn apply<R: Rng>(
    rng: &mut R,
    words: &mut [String],
    transform: CaseTransform,
    substitutions: &IndexMap<char, char>,
) {
    for word in words {
        case(rng, word, transform);
        substitute(word, substitutions);
    }
}

fn case<R: Rng>(rng: &mut R, word: &mut String, transform: CaseTransform) {
    match transform {
        CaseTransform::None => {}
        CaseTransform::Upper => *word = word.to_uppercase(),
        CaseTransform::Lower => *word = word.to_lowercase(),
        CaseTransform::Capitalize => *word = capitalize(word),
        CaseTransform::Invert => *word = invert(word),
        CaseTransform::Alternate => *word = alternate(word, rng.random_bool(0.5)),
        CaseTransform::Random => *word = scramble(rng, word),
    }
}

/// Uppercases the first character, leaves the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lowercases the first character, uppercases the rest.
fn invert(word: &str) -> String {
    let mut chars = word.chars();

    chars.next().map_or_else(String::new, |first| {
        first
            .to_lowercase()
            .chain(chars.flat_map(char::to_uppercase))
            .collect()
    })
}

/// Lowercases the word, then uppercases every second character. The coin
/// decides whether even or odd indices get the uppercase treatment.
fn alternate(word: &str, start_upper: bool) -> String {
    let mut result = String::with_capacity(word.len());

    for (i, c) in word.to_lowercase().chars().enumerate() {
        if (i % 2 == 0) == start_upper {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Uppercases the word, then flips an independent coin per character to
/// decide whether it drops back to lowercase.
fn scramble<R: Rng>(rng: &mut R, word: &str) -> String {
    let mut result = String::with_capacity(word.len());

    for c in word.to_uppercase().chars() {
        if rng.random_bool(0.5) {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Replaces all occurrences of each rule's key with its value, in rule
/// insertion order. Later rules see the output of earlier ones, so chains
/// like `o -> 0` followed by `0 -> O` are deliberate and must compose.
fn substitute(word: &mut String, substitutions: &IndexMap<char, char>) {
    for (&from, &to) in substitutions {
        if word.contains(from) {
            *word = word.replace(from, &to.to_string());
        }
    }
}
