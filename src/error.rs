//! Typed errors for the library layer
//!
//! The binary wraps these in `anyhow` with context; tests match on the variants.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating portfolio content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("content field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("content must list at least one contact method")]
    NoContactMethods,

    #[error("link `{label}` has an empty url")]
    EmptyUrl { label: String },
}

/// The section enumeration and its index mapping disagree
#[derive(Debug, Error, PartialEq, Eq)]
#[error("section {section} maps to index {mapped} but sits at position {position}")]
pub struct SectionMapError {
    pub section: &'static str,
    pub mapped: usize,
    pub position: usize,
}
