use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrateError {
    #[error("docs directory not found: {0:?}")]
    DocsDirMissing(PathBuf),

    #[error("index page not found: {0:?}")]
    IndexMissing(PathBuf),

    #[error("could not extract template structure from index page: missing `{anchor}`")]
    AnchorMissing { anchor: &'static str },

    #[error("error reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IntegrateError {
    /// Fatal errors abort the whole run; the rest only skip one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            IntegrateError::DocsDirMissing(_)
                | IntegrateError::IndexMissing(_)
                | IntegrateError::AnchorMissing { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(IntegrateError::DocsDirMissing("docs".into()).is_fatal());
        assert!(IntegrateError::AnchorMissing { anchor: "</html>" }.is_fatal());

        let read = IntegrateError::Read {
            path: "docs/guide.html".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!read.is_fatal());
        assert!(read.to_string().contains("guide.html"));
    }
}
