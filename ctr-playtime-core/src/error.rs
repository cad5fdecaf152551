use thiserror::Error;

/// Why a candidate file did not produce a [`GameRecord`](crate::GameRecord).
///
/// Rejections are scoped to a single file. The catalog logs them and moves
/// on; they never abort a scan.
#[derive(Debug, Error)]
pub enum Rejection {
    /// No "NCSD" magic at 0x100
    #[error("Not a cartridge container: {0}")]
    NotACartridgeContainer(String),

    /// Program ID bytes are not ASCII
    #[error("Malformed program ID: {0}")]
    MalformedIdentifier(String),

    /// ExeFS directory has no "icon" entry
    #[error("Missing ExeFS icon resource")]
    MissingIconResource,

    /// Icon resource does not start with "SMDH"
    #[error("Invalid metadata block: {0}")]
    InvalidMetadataBlock(String),

    /// A read ran past end of file, or a field failed to decode
    #[error("Truncated or corrupt: {0}")]
    TruncatedOrCorrupt(String),

    /// The file could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Rejection {
    pub fn not_a_container(msg: impl Into<String>) -> Self {
        Self::NotACartridgeContainer(msg.into())
    }

    pub fn malformed_identifier(msg: impl Into<String>) -> Self {
        Self::MalformedIdentifier(msg.into())
    }

    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadataBlock(msg.into())
    }

    pub fn truncated(msg: impl Into<String>) -> Self {
        Self::TruncatedOrCorrupt(msg.into())
    }

    /// Short stable label for log lines and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotACartridgeContainer(_) => "not-a-container",
            Self::MalformedIdentifier(_) => "malformed-identifier",
            Self::MissingIconResource => "missing-icon",
            Self::InvalidMetadataBlock(_) => "invalid-metadata",
            Self::TruncatedOrCorrupt(_) => "truncated",
            Self::Io(_) => "io",
        }
    }
}
