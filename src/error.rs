use std::path::PathBuf;
use thiserror::Error;

/// The main error type for reformat-labels operations.
#[derive(Debug, Error)]
pub enum ReformatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{what} not found: {path}")]
    InputNotFound { what: &'static str, path: PathBuf },

    #[error("Failed to read classes file {path}: {source}")]
    ClassesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse VOC XML from {path}: {message}")]
    VocXmlParse { path: PathBuf, message: String },

    #[error("Failed to parse label CSV from {path}: {source}")]
    LabelCsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid label CSV {path} at line {line}: {message}")]
    LabelCsvInvalid {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("Class '{class_name}' used by {file_path} is not listed in the classes file")]
    UnknownClass {
        class_name: String,
        file_path: String,
    },

    #[error("Image size {width}x{height} cannot be used to normalize coordinates")]
    DegenerateImageSize { width: f64, height: f64 },

    #[error("Input format not implemented: {0}")]
    NotImplemented(String),

    #[error("Failed to render conversion report: {0}")]
    ReportJson(#[from] serde_json::Error),
}
