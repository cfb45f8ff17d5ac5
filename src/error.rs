use crate::table::InsertError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Insert(#[from] InsertError),
}

pub type Result<T> = std::result::Result<T, Error>;
