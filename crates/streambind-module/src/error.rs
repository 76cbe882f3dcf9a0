use streambind_frame::{MessageStructure, WireProtocol};

/// Errors surfaced by module configuration and persistence.
///
/// Inbound processing never returns these — every inbound stage fails soft
/// and drops the offending frame or update.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// The message structure is not in the active protocol's option set.
    #[error("message structure \"{structure}\" is not valid for protocol \"{protocol}\"")]
    InvalidStructure {
        protocol: WireProtocol,
        structure: MessageStructure,
    },

    /// Persisted state failed to serialize or deserialize.
    #[error("module state serialization error: {0}")]
    State(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModuleError>;
