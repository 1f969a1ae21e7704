//! Candidate filtering and word sampling.

use rand::Rng;

use super::Error;

/// Keeps words whose character count lies strictly between the bounds.
///
/// Both bounds are exclusive: a word exactly `min` or exactly `max`
/// characters long is rejected.
pub(super) fn filter(words: Vec<String>, min: usize, max: usize) -> Result<Vec<String>, Error> {
    let candidates = words
        .into_iter()
        .filter(|word| {
            let length = word.chars().count();

            length > min && length < max
        })
        .collect::<Vec<_>>();

    if candidates.is_empty() {
        return Err(Error::NoCandidates { min, max });
    }

    Ok(candidates)
}

/// Draws `count` words uniformly and with replacement, so one password may
/// repeat a word.
pub(super) fn draw<R: Rng>(rng: &mut R, candidates: &[String], count: usize) -> Vec<String> {
    (0..count)
        .map(|_| candidates[rng.random_range(0..candidates.len())].clone())
        .collect()
}
