//! Memorable passphrase generation, "correct horse battery staple" style.
//!
//! Random dictionary words are drawn under length bounds, cased, run through
//! character substitutions and composed with separators, digit groups and
//! symbol padding. [`Settings`] holds the recipe, a [`WordSource`] supplies
//! the candidates and [`Generator`] assembles the passwords.
//!
//! ```no_run
//! use fraseo::{Bundled, Generator, Settings};
//!
//! # fn main() -> Result<(), fraseo::generator::Error> {
//! let mut generator = Generator::with_settings(Bundled::new("english"), Settings::xkcd());
//!
//! let password = generator.generate()?;
//! # Ok(())
//! # }
//! ```

pub mod generator;
pub mod settings;
pub mod wordlist;

pub use generator::{Entropy, Generator, Passwords};
pub use settings::{CaseTransform, Padding, PaddingChar, Separator, Settings};
pub use wordlist::{Bundled, WordFile, WordSource};
