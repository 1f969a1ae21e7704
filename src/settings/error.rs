use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Word length bounds must be at least 1 character")]
    WordLength,
    #[error("A password needs at least 1 word")]
    WordCount,
    #[error("The symbol alphabet must not be empty")]
    SymbolAlphabet,
}
