use thiserror::Error;

use crate::bank::BankError;
use crate::model::{OptionIndexError, StreamError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    OptionIndex(#[from] OptionIndexError),
    #[error(transparent)]
    Stream(#[from] StreamError),
}
