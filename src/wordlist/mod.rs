//! Where candidate words come from.
//!
//! A [`WordSource`] is consulted again for every generated password, so a
//! file backed source picks up edits between generations without rebuilding
//! the generator.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

mod bundled;
mod error;

pub use error::Error;

/// Anything that can hand the generator a batch of candidate words.
pub trait WordSource {
    /// Produces the words to filter and sample from.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be read.
    fn words(&self) -> Result<Vec<String>, Error>;
}

impl<W: AsRef<str>> WordSource for Vec<W> {
    fn words(&self) -> Result<Vec<String>, Error> {
        Ok(self.iter().map(|word| word.as_ref().to_owned()).collect())
    }
}

impl<W: AsRef<str>> WordSource for [W] {
    fn words(&self) -> Result<Vec<String>, Error> {
        Ok(self.iter().map(|word| word.as_ref().to_owned()).collect())
    }
}

impl<W: AsRef<str>, const N: usize> WordSource for [W; N] {
    fn words(&self) -> Result<Vec<String>, Error> {
        self.as_slice().words()
    }
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn words(&self) -> Result<Vec<String>, Error> {
        (**self).words()
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn words(&self) -> Result<Vec<String>, Error> {
        (**self).words()
    }
}

/// Newline separated word file, gzip compressed if the path ends in `.gz`.
///
/// Lines are trimmed and blank lines skipped. No other normalization is
/// applied, so mixed case files produce mixed case candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFile {
    path: PathBuf,
}

impl WordFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for WordFile {
    fn words(&self) -> Result<Vec<String>, Error> {
        let open = File::open(&self.path).and_then(|file| {
            if self.path.extension().is_some_and(|ext| ext == "gz") {
                read_words(flate2::read::GzDecoder::new(file))
            } else {
                read_words(file)
            }
        });

        open.map_err(|source| Error::File {
            path: self.path.clone(),
            source,
        })
    }
}

/// A word list compiled into the library, addressed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundled {
    name: String,
}

impl Bundled {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl WordSource for Bundled {
    fn words(&self) -> Result<Vec<String>, Error> {
        let compressed =
            bundled::find(&self.name).ok_or_else(|| Error::UnknownList(self.name.clone()))?;

        Ok(bundled::inflate(compressed)?)
    }
}

/// Resolves `res:<name>` to a bundled list and anything else to a file path.
#[must_use]
pub fn open(location: &str) -> Box<dyn WordSource> {
    match location.strip_prefix("res:") {
        Some(name) => Box::new(Bundled::new(name)),
        None => Box::new(WordFile::new(location)),
    }
}

fn read_words(reader: impl Read) -> Result<Vec<String>, std::io::Error> {
    let mut words = Vec::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = line.trim();

        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }

    Ok(words)
}
