//! Error types for stylesheet generation

use std::io;

use thiserror::Error;

use crate::config::StylesLang;

/// Errors that can occur while loading input or generating styles
#[derive(Error, Debug)]
pub enum StylesError {
    /// The boilerplate template for a non-CSS dialect could not be loaded
    #[error("failed to load {lang} template: {source}")]
    Template {
        lang: StylesLang,
        #[source]
        source: io::Error,
    },

    /// Failed to read a manifest or config file
    #[error("failed to read file: {0}")]
    Io(#[from] io::Error),

    /// Manifest or config file is not valid TOML for its schema
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
