use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// In-memory transport that records every send.
///
/// Used by tests and by CLI commands that inspect what a module would have
/// put on the wire. Readiness can be toggled to exercise the not-ready path.
#[derive(Debug)]
pub struct MemoryTransport {
    sent: Vec<Vec<u8>>,
    ready: bool,
}

impl MemoryTransport {
    /// Create a ready transport.
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            ready: true,
        }
    }

    /// Create a transport that reports not ready.
    pub fn not_ready() -> Self {
        Self {
            sent: Vec::new(),
            ready: false,
        }
    }

    /// Toggle readiness.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Everything sent so far, one entry per send call.
    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }

    /// Number of send calls that reached the transport.
    pub fn send_count(&self) -> usize {
        self.sent.len()
    }

    /// Drop the recorded sends.
    pub fn clear(&mut self) {
        self.sent.clear();
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MemoryTransport {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.ready {
            return Err(TransportError::NotReady);
        }
        self.sent.push(bytes.to_vec());
        Ok(())
    }
}
