/** errors produced while reading or writing experiment files.

`MissingFile` and `Parse` abort the current tool invocation when they hit its
primary input; the catalog-iterating tools report them per-row on stderr and
continue with the next row.
*/
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// the file does not exist
    #[error("file not found: {0}")]
    MissingFile(String),
    /// the file exists but could not be read or written
    #[error("unable to access {filename}: {source}")]
    Io {
        /// file being accessed
        filename: String,
        /// underlying I/O error
        source: std::io::Error,
    },
    /// the file content is not valid structured data
    #[error("unable to parse {filename}: {source}")]
    Parse {
        /// file being parsed
        filename: String,
        /// underlying JSON error
        source: serde_json::Error,
    },
    /// a record could not be serialized back to JSON
    #[error("unable to encode {filename}: {source}")]
    Encode {
        /// file being written
        filename: String,
        /// underlying JSON error
        source: serde_json::Error,
    },
    /// the catalog table is malformed (missing column, truncated row, ...)
    #[error("invalid catalog: {0}")]
    Catalog(String),
}

/// result alias used by the library modules
pub type Result<T> = std::result::Result<T, Error>;
