//! Password recipe: every knob the generator consults.
//!
//! A [`Settings`] value is a plain record. Setters validate their input and
//! leave the previous value untouched on rejection, so a live instance is
//! always usable. Records built elsewhere (e.g. deserialized from a config
//! file) go through [`Settings::validate`] before the first generation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod error;

pub use error::Error;

/// Symbols drawn from when no custom alphabet is configured.
pub const DEFAULT_SYMBOLS: &[char] = &[
    '!', '@', '$', '%', '^', '&', '*', '-', '_', '+', '=', ':', '|', '~', '?', '/', '.', ';',
];

/// Per-word case transform, applied before character substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseTransform {
    /// Leave every word exactly as the word list spells it.
    None,
    Upper,
    Lower,
    /// Uppercase the first character, leave the rest untouched.
    Capitalize,
    /// Lowercase the first character, uppercase the rest.
    Invert,
    /// Lowercase the word, then uppercase every second character, starting
    /// from an offset decided by one coin flip per word.
    Alternate,
    /// Uppercase the word, then flip an independent coin per character.
    Random,
}

/// What goes between words, digit groups and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    /// One draw from the separator alphabet per generated password.
    Random,
    /// Run everything together, no delimiter anywhere.
    None,
    Fixed(char),
}

/// Symbol padding strategy around the otherwise finished password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    None,
    /// A fixed count of padding characters on each side.
    Fixed,
    /// Pad or truncate until the password is exactly `pad_to_length`
    /// characters long.
    Adaptive,
}

/// Which character symbol padding uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingChar {
    /// Resolved per password, never written back: fixed padding borrows the
    /// separator's first character, adaptive padding draws from the symbol
    /// alphabet.
    Random,
    Fixed(char),
}

/// Complete recipe for one password shape.
///
/// Word length bounds are exclusive on both ends and self-ordering: the
/// stored pair is reordered at use time, so `min > max` is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    word_count: usize,
    word_length_min: usize,
    word_length_max: usize,
    case_transform: CaseTransform,
    separator: Separator,
    symbol_alphabet: Vec<char>,
    separator_alphabet: Vec<char>,
    padding_digits_before: usize,
    padding_digits_after: usize,
    padding: Padding,
    padding_char: PaddingChar,
    padding_symbols_before: usize,
    padding_symbols_after: usize,
    pad_to_length: usize,
    substitutions: IndexMap<char, char>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_count: 3,
            word_length_min: 4,
            word_length_max: 8,
            case_transform: CaseTransform::Capitalize,
            separator: Separator::Random,
            symbol_alphabet: DEFAULT_SYMBOLS.to_vec(),
            separator_alphabet: Vec::new(),
            padding_digits_before: 2,
            padding_digits_after: 2,
            padding: Padding::Fixed,
            padding_char: PaddingChar::Random,
            padding_symbols_before: 2,
            padding_symbols_after: 2,
            pad_to_length: 0,
            substitutions: IndexMap::new(),
        }
    }
}

impl Settings {
    /// Three capitalized words with digits and symbol padding on both sides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Four alternating-case words padded or truncated to exactly 32
    /// characters, for sites with a medium length cap.
    #[must_use]
    pub fn web32() -> Self {
        Self {
            word_count: 4,
            word_length_min: 3,
            word_length_max: 6,
            case_transform: CaseTransform::Alternate,
            padding: Padding::Adaptive,
            pad_to_length: 32,
            padding_symbols_before: 0,
            padding_symbols_after: 0,
            ..Self::default()
        }
    }

    /// Three short lowercase words squeezed into exactly 16 characters.
    #[must_use]
    pub fn web16() -> Self {
        Self {
            word_count: 3,
            word_length_min: 2,
            word_length_max: 5,
            case_transform: CaseTransform::Lower,
            padding_digits_before: 0,
            padding_digits_after: 2,
            padding: Padding::Adaptive,
            pad_to_length: 16,
            padding_symbols_before: 0,
            padding_symbols_after: 0,
            ..Self::default()
        }
    }

    /// Six words padded to the 63 characters a WPA2 passphrase allows.
    #[must_use]
    pub fn wifi() -> Self {
        Self {
            word_count: 6,
            padding_digits_before: 4,
            padding_digits_after: 4,
            padding: Padding::Adaptive,
            pad_to_length: 63,
            padding_symbols_before: 0,
            padding_symbols_after: 0,
            ..Self::default()
        }
    }

    /// Mixed-case words, digits and hyphens only, no symbol padding. Fits
    /// account systems that reject most special characters.
    #[must_use]
    pub fn apple_id() -> Self {
        Self {
            word_count: 3,
            word_length_min: 4,
            word_length_max: 8,
            separator: Separator::Fixed('-'),
            padding_digits_before: 2,
            padding_digits_after: 2,
            padding: Padding::None,
            padding_symbols_before: 0,
            padding_symbols_after: 0,
            ..Self::default()
        }
    }

    /// Four plain lowercase words joined by hyphens, nothing else.
    #[must_use]
    pub fn xkcd() -> Self {
        Self {
            word_count: 4,
            word_length_min: 3,
            word_length_max: 9,
            case_transform: CaseTransform::Lower,
            separator: Separator::Fixed('-'),
            padding_digits_before: 0,
            padding_digits_after: 0,
            padding: Padding::None,
            padding_symbols_before: 0,
            padding_symbols_after: 0,
            ..Self::default()
        }
    }

    /// How many words each password contains.
    ///
    /// # Errors
    /// Rejects `0`; a password needs at least one word.
    pub const fn set_word_count(&mut self, count: usize) -> Result<(), Error> {
        if count == 0 {
            return Err(Error::WordCount);
        }

        self.word_count = count;

        Ok(())
    }

    /// Lower word length bound, exclusive: only strictly longer words are
    /// eligible.
    ///
    /// # Errors
    /// Rejects `0`.
    pub const fn set_word_length_min(&mut self, length: usize) -> Result<(), Error> {
        if length == 0 {
            return Err(Error::WordLength);
        }

        self.word_length_min = length;

        Ok(())
    }

    /// Upper word length bound, exclusive: only strictly shorter words are
    /// eligible.
    ///
    /// # Errors
    /// Rejects `0`.
    pub const fn set_word_length_max(&mut self, length: usize) -> Result<(), Error> {
        if length == 0 {
            return Err(Error::WordLength);
        }

        self.word_length_max = length;

        Ok(())
    }

    pub const fn set_case_transform(&mut self, transform: CaseTransform) {
        self.case_transform = transform;
    }

    pub const fn set_separator(&mut self, separator: Separator) {
        self.separator = separator;
    }

    /// Replaces the symbol alphabet, dropping duplicate characters while
    /// keeping first-occurrence order.
    ///
    /// # Errors
    /// Rejects an empty alphabet; random separators and padding characters
    /// draw from it.
    pub fn set_symbol_alphabet(&mut self, alphabet: &[char]) -> Result<(), Error> {
        if alphabet.is_empty() {
            return Err(Error::SymbolAlphabet);
        }

        self.symbol_alphabet = dedup(alphabet);

        Ok(())
    }

    /// Replaces the separator alphabet. An empty slice unsets it, falling
    /// back to the symbol alphabet for random separators.
    pub fn set_separator_alphabet(&mut self, alphabet: &[char]) {
        self.separator_alphabet = dedup(alphabet);
    }

    pub const fn set_digit_padding(&mut self, before: usize, after: usize) {
        self.padding_digits_before = before;
        self.padding_digits_after = after;
    }

    pub const fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    pub const fn set_padding_char(&mut self, padding_char: PaddingChar) {
        self.padding_char = padding_char;
    }

    /// Padding character counts for [`Padding::Fixed`].
    pub const fn set_symbol_padding(&mut self, before: usize, after: usize) {
        self.padding_symbols_before = before;
        self.padding_symbols_after = after;
    }

    /// Target length for [`Padding::Adaptive`]. `0` disables padding.
    pub const fn set_pad_to_length(&mut self, length: usize) {
        self.pad_to_length = length;
    }

    /// Maps `from` to `to` during the substitution step. Substitutions apply
    /// in insertion order, so later rules see the output of earlier ones.
    pub fn add_substitution(&mut self, from: char, to: char) {
        self.substitutions.insert(from, to);
    }

    pub fn set_substitutions(&mut self, substitutions: IndexMap<char, char>) {
        self.substitutions = substitutions;
    }

    pub fn clear_substitutions(&mut self) {
        self.substitutions.clear();
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub const fn word_length_min(&self) -> usize {
        self.word_length_min
    }

    #[must_use]
    pub const fn word_length_max(&self) -> usize {
        self.word_length_max
    }

    /// The stored bounds in ascending order, as the generator applies them.
    #[must_use]
    pub const fn word_length_bounds(&self) -> (usize, usize) {
        if self.word_length_min <= self.word_length_max {
            (self.word_length_min, self.word_length_max)
        } else {
            (self.word_length_max, self.word_length_min)
        }
    }

    #[must_use]
    pub const fn case_transform(&self) -> CaseTransform {
        self.case_transform
    }

    #[must_use]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    #[must_use]
    pub fn symbol_alphabet(&self) -> &[char] {
        &self.symbol_alphabet
    }

    #[must_use]
    pub fn separator_alphabet(&self) -> &[char] {
        &self.separator_alphabet
    }

    #[must_use]
    pub const fn digit_padding(&self) -> (usize, usize) {
        (self.padding_digits_before, self.padding_digits_after)
    }

    #[must_use]
    pub const fn padding(&self) -> Padding {
        self.padding
    }

    #[must_use]
    pub const fn padding_char(&self) -> PaddingChar {
        self.padding_char
    }

    #[must_use]
    pub const fn symbol_padding(&self) -> (usize, usize) {
        (self.padding_symbols_before, self.padding_symbols_after)
    }

    #[must_use]
    pub const fn pad_to_length(&self) -> usize {
        self.pad_to_length
    }

    #[must_use]
    pub const fn substitutions(&self) -> &IndexMap<char, char> {
        &self.substitutions
    }

    /// The alphabet random separators draw from.
    #[must_use]
    pub fn separator_pool(&self) -> &[char] {
        if self.separator_alphabet.is_empty() {
            &self.symbol_alphabet
        } else {
            &self.separator_alphabet
        }
    }

    /// Checks invariants the setters enforce, for records that bypassed them.
    ///
    /// # Errors
    /// Returns the first violated invariant: zero word count, a zero length
    /// bound or an empty symbol alphabet.
    pub fn validate(&self) -> Result<(), Error> {
        if self.word_count == 0 {
            return Err(Error::WordCount);
        }

        if self.word_length_min == 0 || self.word_length_max == 0 {
            return Err(Error::WordLength);
        }

        if self.symbol_alphabet().is_empty() {
            return Err(Error::SymbolAlphabet);
        }

        Ok(())
    }
}

fn dedup(chars: &[char]) -> Vec<char> {
    let mut unique = Vec::with_capacity(chars.len());

    for &c in chars {
        if !unique.contains(&c) {
            unique.push(c);
        }
    }

    unique
}
