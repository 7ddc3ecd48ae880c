use std::{io, path::PathBuf};

use feriados_parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned an empty page")]
    EmptyBody { url: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
