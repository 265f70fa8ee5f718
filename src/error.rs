use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal failures of a reverse operation. Each aborts the whole operation;
/// nothing is retried and no partial output is left behind.
#[derive(Debug, Error)]
pub enum Error {
    /// Source file missing, unreadable, or not a valid PDF.
    #[error("failed to load PDF {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// Destination unwritable. The atomic temp-file save means the
    /// destination is never left truncated.
    #[error("failed to write PDF {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Structural fault while rebuilding the page tree.
    #[error("page tree rebuild failed: {reason}")]
    Processing {
        reason: String,
        #[source]
        source: Option<lopdf::Error>,
    },
}
