use crate::error::Result;

/// Outbound transport capability.
///
/// Implementations wrap whatever actually moves bytes — a serial port, a TCP
/// stream, a test buffer. The module checks [`Transport::is_ready`] before
/// every send and never retries on its own.
pub trait Transport {
    /// Whether the transport can currently accept a send.
    fn is_ready(&self) -> bool;

    /// Send a finite byte sequence immediately.
    fn send(&mut self, bytes: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes)
    }
}
