use thiserror::Error;

/// Result type alias using the canonical error facility
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Content never produces an error: a block without the pool marker is noise
/// and a pool block without a status line is recorded with an empty state.
/// Every kind below is about storage, configuration or caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// A referenced raw or normalized snapshot does not exist or cannot be read
    MissingInput,
    /// A comparison was requested with fewer than two normalized snapshots
    NotEnoughSnapshots,
    /// Caller supplied an invalid argument (e.g. selection index out of range)
    InvalidInput,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingInput => "ERR_MISSING_INPUT",
            ExErrorKind::NotEnoughSnapshots => "ERR_NOT_ENOUGH_SNAPSHOTS",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the
/// operation and path that failed.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the filesystem path the operation was working on
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for pooldiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolDiffError {
    /// Snapshot file is absent or unreadable
    #[error("Snapshot not readable: {path}: {reason}")]
    MissingInput { path: String, reason: String },

    /// Fewer than two normalized snapshots are available to compare
    #[error("Need at least 2 parsed snapshots to compare, found {available}")]
    NotEnoughSnapshots { available: usize },

    /// 1-based selection index outside the catalog
    #[error("Invalid selection {index}: expected 1-{available}")]
    SelectionOutOfRange { index: usize, available: usize },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    /// Filesystem write or listing failure
    #[error("I/O failure during {op}: {message}")]
    Io { op: String, message: String },
}

impl From<PoolDiffError> for ExError {
    fn from(err: PoolDiffError) -> Self {
        let message = err.to_string();
        match err {
            PoolDiffError::MissingInput { path, .. } => ExError::new(ExErrorKind::MissingInput)
                .with_op("read_snapshot")
                .with_path(path)
                .with_message(message),

            PoolDiffError::NotEnoughSnapshots { .. } => {
                ExError::new(ExErrorKind::NotEnoughSnapshots)
                    .with_op("select_snapshots")
                    .with_message(message)
            }

            PoolDiffError::SelectionOutOfRange { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("select_snapshots")
                .with_message(message),

            PoolDiffError::InvalidConfig { path, .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_path(path)
                .with_message(message),

            PoolDiffError::Io { op, .. } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),
        }
    }
}
