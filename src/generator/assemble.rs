//! Final assembly: separators, digit groups and symbol padding.

use std::cmp::Ordering;
use std::iter::repeat_n;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::settings::{Padding, PaddingChar, Separator, Settings};

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Resolves the separator once; the same character fills every slot of the
/// password being built.
pub(super) fn separator<R: Rng>(rng: &mut R, settings: &Settings) -> Option<char> {
    match settings.separator() {
        Separator::None => None,
        Separator::Fixed(c) => Some(c),
        Separator::Random => settings.separator_pool().choose(rng).copied(),
    }
}

/// Joins digit groups and words in order, then applies symbol padding.
///
/// The separator only appears next to a digit group when that group is
/// non-empty, so disabling digits leaves no stray delimiters behind.
pub(super) fn compose<R: Rng>(
    rng: &mut R,
    words: Vec<String>,
    separator: Option<char>,
    settings: &Settings,
) -> String {
    let (before, after) = settings.digit_padding();

    let mut parts = Vec::with_capacity(words.len() + 2);

    if before > 0 {
        parts.push(digits(rng, before));
    }

    parts.extend(words);

    if after > 0 {
        parts.push(digits(rng, after));
    }

    let password = match separator {
        Some(c) => parts.join(c.to_string().as_str()),
        None => parts.concat(),
    };

    match settings.padding() {
        Padding::None => password,
        Padding::Fixed => pad_fixed(password, separator, settings),
        Padding::Adaptive => pad_adaptive(rng, password, settings),
    }
}

fn digits<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| DIGITS[rng.random_range(0..DIGITS.len())])
        .collect()
}

/// Repeats the padding character a fixed number of times on each side.
///
/// A random padding character borrows the resolved separator for this call
/// only; without a separator to borrow, the padding is skipped.
fn pad_fixed(password: String, separator: Option<char>, settings: &Settings) -> String {
    let (before, after) = settings.symbol_padding();

    if before == 0 && after == 0 {
        return password;
    }

    let c = match settings.padding_char() {
        PaddingChar::Fixed(c) => c,
        PaddingChar::Random => match separator {
            Some(c) => c,
            None => {
                log::warn!("Skipping fixed padding: no separator to borrow a padding character from");

                return password;
            }
        },
    };

    let mut padded = String::with_capacity(password.len() + (before + after) * c.len_utf8());
    padded.extend(repeat_n(c, before));
    padded.push_str(&password);
    padded.extend(repeat_n(c, after));

    padded
}

/// Pads or truncates until the password is exactly `pad_to_length`
/// characters long. A target of zero disables the step.
fn pad_adaptive<R: Rng>(rng: &mut R, mut password: String, settings: &Settings) -> String {
    let target = settings.pad_to_length();

    if target == 0 {
        return password;
    }

    let length = password.chars().count();

    match length.cmp(&target) {
        Ordering::Equal => password,
        Ordering::Greater => password.chars().take(target).collect(),
        Ordering::Less => {
            let c = match settings.padding_char() {
                PaddingChar::Fixed(c) => Some(c),
                PaddingChar::Random => settings.symbol_alphabet().choose(rng).copied(),
            };

            if let Some(c) = c {
                password.extend(repeat_n(c, target - length));
            }

            password
        }
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::super::testing::ConstRng;
    use super::*;
    use crate::settings::Error;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&word| word.to_owned()).collect()
    }

    fn base() -> Settings {
        let mut settings = Settings::default();
        settings.set_separator(Separator::Fixed('-'));
        settings.set_digit_padding(0, 0);
        settings.set_padding(Padding::None);

        settings
    }

    #[test]
    fn fixed_and_absent_separators_resolve_without_randomness() {
        let mut settings = base();

        assert_eq!(
            Some('-'),
            separator(&mut ConstRng(u64::MAX), &settings)
        );

        settings.set_separator(Separator::None);
        assert_eq!(None, separator(&mut ConstRng(u64::MAX), &settings));
    }

    #[test]
    fn random_separator_prefers_the_separator_alphabet() -> Result<(), Error> {
        let mut settings = base();
        settings.set_separator(Separator::Random);
        settings.set_symbol_alphabet(&['!'])?;

        assert_eq!(Some('!'), separator(&mut ConstRng(0), &settings));

        settings.set_separator_alphabet(&['.']);
        assert_eq!(Some('.'), separator(&mut ConstRng(0), &settings));

        Ok(())
    }

    #[test]
    fn digit_groups_sit_outside_the_words() {
        let mut settings = base();
        settings.set_digit_padding(2, 2);

        let password = compose(
            &mut StdRng::seed_from_u64(1),
            words(&["Correct", "Horse"]),
            Some('-'),
            &settings,
        );

        let segments = password.split('-').collect::<Vec<_>>();

        assert_eq!(4, segments.len());
        assert!(segments[0].len() == 2 && segments[0].chars().all(|c| c.is_ascii_digit()));
        assert_eq!("Correct", segments[1]);
        assert_eq!("Horse", segments[2]);
        assert!(segments[3].len() == 2 && segments[3].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_digit_groups_leave_no_stray_separator() {
        let mut settings = base();
        settings.set_digit_padding(0, 3);

        let password = compose(
            &mut StdRng::seed_from_u64(1),
            words(&["Correct", "Horse"]),
            Some('-'),
            &settings,
        );

        assert!(password.starts_with("Correct-Horse-"));
        assert!(password["Correct-Horse-".len()..]
            .chars()
            .all(|c| c.is_ascii_digit()));
        assert_eq!("Correct-Horse-".len() + 3, password.len());
    }

    #[test]
    fn no_separator_runs_everything_together() {
        let mut settings = base();
        settings.set_digit_padding(2, 2);

        let password = compose(
            &mut StdRng::seed_from_u64(1),
            words(&["Correct", "Horse"]),
            None,
            &settings,
        );

        assert_eq!(16, password.len());
        assert_eq!("CorrectHorse", &password[2..14]);
        assert!(password[..2].chars().all(|c| c.is_ascii_digit()));
        assert!(password[14..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn fixed_padding_borrows_the_separator() {
        let mut settings = base();
        settings.set_padding(Padding::Fixed);
        settings.set_symbol_padding(2, 2);

        let password = compose(&mut ConstRng(0), words(&["Correct"]), Some('-'), &settings);

        assert_eq!("--Correct--", password);
    }

    #[test]
    fn fixed_padding_without_a_separator_is_skipped() {
        let mut settings = base();
        settings.set_padding(Padding::Fixed);
        settings.set_symbol_padding(2, 2);

        let password = compose(&mut ConstRng(0), words(&["Correct"]), None, &settings);

        assert_eq!("Correct", password);
    }

    #[test]
    fn an_explicit_padding_char_needs_no_separator() {
        let mut settings = base();
        settings.set_padding(Padding::Fixed);
        settings.set_padding_char(PaddingChar::Fixed('+'));
        settings.set_symbol_padding(2, 1);

        let password = compose(&mut ConstRng(0), words(&["Correct"]), None, &settings);

        assert_eq!("++Correct+", password);
    }

    #[test]
    fn zero_count_fixed_padding_changes_nothing() {
        let mut settings = base();
        settings.set_padding(Padding::Fixed);
        settings.set_symbol_padding(0, 0);

        let password = compose(&mut ConstRng(0), words(&["Correct"]), Some('-'), &settings);

        assert_eq!("Correct", password);
    }

    #[test]
    fn adaptive_padding_reaches_the_exact_target() -> Result<(), Error> {
        let mut settings = base();
        settings.set_padding(Padding::Adaptive);
        settings.set_pad_to_length(10);
        settings.set_symbol_alphabet(&['!'])?;

        let password = compose(&mut ConstRng(0), words(&["Correct"]), None, &settings);

        assert_eq!("Correct!!!", password);

        Ok(())
    }

    #[test]
    fn adaptive_padding_truncates_from_the_end() {
        let mut settings = base();
        settings.set_padding(Padding::Adaptive);
        settings.set_pad_to_length(4);

        let password = compose(&mut ConstRng(0), words(&["Correct"]), None, &settings);

        assert_eq!("Corr", password);
    }

    #[test]
    fn adaptive_padding_is_idempotent_at_the_target_length() {
        let mut settings = base();
        settings.set_padding(Padding::Adaptive);
        settings.set_pad_to_length(7);

        let password = compose(&mut ConstRng(0), words(&["Correct"]), None, &settings);

        assert_eq!("Correct", password);
    }

    #[test]
    fn adaptive_padding_with_zero_target_is_disabled() {
        let mut settings = base();
        settings.set_padding(Padding::Adaptive);
        settings.set_pad_to_length(0);

        let password = compose(&mut ConstRng(0), words(&["Correct"]), None, &settings);

        assert_eq!("Correct", password);
    }

    #[test]
    fn adaptive_padding_counts_characters_not_bytes() -> Result<(), Error> {
        let mut settings = base();
        settings.set_padding(Padding::Adaptive);
        settings.set_pad_to_length(5);
        settings.set_symbol_alphabet(&['!'])?;

        let password = compose(&mut ConstRng(0), words(&["straße"]), None, &settings);

        assert_eq!("straß", password);

        Ok(())
    }
}
