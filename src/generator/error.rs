use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No candidate word is strictly between {min} and {max} characters long")]
    NoCandidates { min: usize, max: usize },
    #[error(transparent)]
    Source(#[from] crate::wordlist::Error),
    #[error(transparent)]
    Settings(#[from] crate::settings::Error),
}
