use std::fmt;

/// What went wrong while acquiring an item's content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The identifier could not be turned into a request.
    InvalidSource,
    /// The content source could not be reached or refused the request.
    Unavailable(String),
    /// Bytes arrived but could not be decoded.
    Corrupt(String),
    /// The loader panicked.
    Panicked,
}

/// Content acquisition failure, scoped to a single item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadError {
    source: String,
    kind: LoadErrorKind,
}

impl LoadError {
    pub fn new(source: impl Into<String>, kind: LoadErrorKind) -> Self {
        Self {
            source: source.into(),
            kind,
        }
    }

    pub fn unavailable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(source, LoadErrorKind::Unavailable(reason.into()))
    }

    /// Identifier of the content that failed to load.
    pub fn source_id(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> &LoadErrorKind {
        &self.kind
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LoadErrorKind::InvalidSource => write!(f, "invalid content source {:?}", self.source),
            LoadErrorKind::Unavailable(reason) => {
                write!(f, "{} unavailable: {reason}", self.source)
            }
            LoadErrorKind::Corrupt(reason) => write!(f, "{} is corrupt: {reason}", self.source),
            LoadErrorKind::Panicked => write!(f, "loader panicked while fetching {}", self.source),
        }
    }
}

impl std::error::Error for LoadError {}
