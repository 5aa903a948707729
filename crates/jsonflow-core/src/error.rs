//! Error taxonomy for the flow core

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Invalid JSON: {message} at line {line} column {column}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("flow has no root node `$`")]
    MissingRoot,

    #[error("edge {edge} references unknown node")]
    UnknownEndpoint { edge: String },

    #[error("node {id} has more than one parent")]
    MultipleParents { id: String },

    #[error("duplicate node id {id}")]
    DuplicateNode { id: String },

    #[error("edges form a cycle")]
    Cycle,

    #[error("node {id} is not reachable from the root")]
    Unreachable { id: String },
}

pub type Result<T> = std::result::Result<T, FlowError>;
