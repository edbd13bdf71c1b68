use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while normalizing a file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required argument <PATH>")]
    MissingArgument,

    #[error("{}: not found", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: permission denied", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classifies an I/O error raised while reading or writing `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            _ => Error::Io { path, source },
        }
    }

    /// Process exit status for this error. Usage errors get 2, like clap's own.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingArgument => 2,
            Error::NotFound { .. } | Error::PermissionDenied { .. } | Error::Io { .. } => 1,
        }
    }
}
