use std::io;
use std::path::{Path, PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("destination directory does not exist: {}", .dir.display())]
    DestinationMissing { dir: PathBuf },
    #[error("line {line}: not a hexadecimal word: {text:?}")]
    HexParse { line: usize, text: String },
    #[error("line {line}: no mnemonic left to pair with (source has {mnemonics} lines)")]
    IndexOverrun { line: usize, mnemonics: usize },
    #[error("hex dump has {words} words but source has {mnemonics} lines")]
    LineCountMismatch { words: usize, mnemonics: usize },
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {}", exit_text(.code))]
    ProcessFailed { program: String, code: Option<i32> },
    #[error("{program} did not produce {}", .path.display())]
    MissingOutput { program: String, path: PathBuf },
}

fn exit_text(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

impl Error {
    /// Classify an I/O failure on `path` into the reported error kinds.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            _ => Error::Io { path, source },
        }
    }
}
