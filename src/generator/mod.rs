//! The password assembler.
//!
//! A [`Generator`] owns a word source, a [`Settings`] record and the
//! randomness it draws from. Every call re-runs the whole pipeline against
//! the current configuration: re-read the source, filter by length, draw
//! words, transform them and assemble the final string.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::settings::Settings;
use crate::wordlist::WordSource;

mod assemble;
mod entropy;
mod error;
mod select;
mod transform;

pub use entropy::Entropy;
pub use error::Error;

pub struct Generator<S: WordSource, R: Rng = ThreadRng> {
    source: S,
    settings: Settings,
    rng: R,
}

impl<S: WordSource> Generator<S> {
    /// Generator with default settings, drawing from the thread local rng.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_settings(source, Settings::default())
    }

    #[must_use]
    pub fn with_settings(source: S, settings: Settings) -> Self {
        Self::with_rng(source, settings, rand::rng())
    }
}

impl<S: WordSource, R: Rng> Generator<S, R> {
    /// Generator drawing from a caller provided rng, e.g. a seeded one for
    /// reproducible output.
    #[must_use]
    pub const fn with_rng(source: S, settings: Settings, rng: R) -> Self {
        Self {
            source,
            settings,
            rng,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Settings may be changed between calls; the next password already
    /// follows the updated recipe.
    pub const fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Assembles one password.
    ///
    /// # Errors
    /// Fails when the settings do not hold their invariants, when the word
    /// source cannot be read, or when the length filter rejects every
    /// candidate.
    pub fn generate(&mut self) -> Result<String, Error> {
        self.settings.validate()?;

        let (min, max) = self.settings.word_length_bounds();
        let candidates = select::filter(self.source.words()?, min, max)?;

        log::debug!(
            "Drawing {} of {} candidate words",
            self.settings.word_count(),
            candidates.len()
        );

        let mut words = select::draw(&mut self.rng, &candidates, self.settings.word_count());

        transform::apply(
            &mut self.rng,
            &mut words,
            self.settings.case_transform(),
            self.settings.substitutions(),
        );

        let separator = assemble::separator(&mut self.rng, &self.settings);

        Ok(assemble::compose(
            &mut self.rng,
            words,
            separator,
            &self.settings,
        ))
    }

    /// Lazy sequence of `count` passwords. Nothing is drawn until the
    /// iterator is advanced, and each element re-runs the full pipeline, so
    /// an error surfaces at the position it occurs instead of aborting the
    /// whole batch.
    pub fn generate_many(&mut self, count: usize) -> Passwords<'_, S, R> {
        Passwords {
            generator: self,
            remaining: count,
        }
    }

    /// Estimates the randomness a password from the current recipe carries.
    ///
    /// # Errors
    /// Fails like [`Self::generate`] does: the candidate set has to be
    /// readable and non-empty for the estimate to mean anything.
    pub fn entropy(&self) -> Result<Entropy, Error> {
        self.settings.validate()?;

        let (min, max) = self.settings.word_length_bounds();
        let candidates = select::filter(self.source.words()?, min, max)?;

        Ok(entropy::estimate(&candidates, &self.settings))
    }
}

/// Iterator returned by [`Generator::generate_many`].
#[must_use = "the sequence is lazy and generates nothing until iterated"]
pub struct Passwords<'a, S: WordSource, R: Rng> {
    generator: &'a mut Generator<S, R>,
    remaining: usize,
}

impl<S: WordSource, R: Rng> Iterator for Passwords<'_, S, R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        Some(self.generator.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: WordSource, R: Rng> ExactSizeIterator for Passwords<'_, S, R> {}

impl<S: WordSource, R: Rng> std::iter::FusedIterator for Passwords<'_, S, R> {}


#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::settings;

    const WORDS: &[&str] = &["correct", "horse", "battery", "staple"];

    #[test]
    fn settings_are_validated_before_any_draw() -> Result<(), serde_json::Error> {
        let broken: Settings = serde_json::from_str(r#"{"word_count": 0}"#)?;

        let mut generator = Generator::with_settings(WORDS, broken);

        assert!(matches!(
            generator.generate(),
            Err(Error::Settings(settings::Error::WordCount))
        ));

        Ok(())
    }

    #[test]
    fn seeded_generators_are_reproducible() -> Result<(), Error> {
        let settings = Settings::default();

        let mut first = Generator::with_rng(WORDS, settings.clone(), StdRng::seed_from_u64(42));
        let mut second = Generator::with_rng(WORDS, settings, StdRng::seed_from_u64(42));

        assert_eq!(first.generate()?, second.generate()?);

        Ok(())
    }

    #[test]
    fn settings_changes_apply_to_the_next_password() -> Result<(), Error> {
        let mut generator = Generator::with_rng(
            WORDS,
            Settings::xkcd(),
            StdRng::seed_from_u64(7),
        );

        generator.settings_mut().set_word_count(2)?;
        let short = generator.generate()?;
        assert_eq!(1, short.matches('-').count());

        generator.settings_mut().set_word_count(4)?;
        let long = generator.generate()?;
        assert_eq!(3, long.matches('-').count());

        Ok(())
    }

    #[test]
    fn entropy_needs_candidates_too() {
        let generator = Generator::new(["hi"]);

        assert!(matches!(
            generator.entropy(),
            Err(Error::NoCandidates { .. })
        ));
    }
}
