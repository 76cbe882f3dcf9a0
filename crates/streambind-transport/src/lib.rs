//! Transport abstraction for streambind modules.
//!
//! A module never opens a socket or serial port itself — it is handed
//! something implementing [`Transport`] for its outbound side, and inbound
//! chunks are pushed into it from whatever I/O loop the host runs. When that
//! loop lives on another thread, the [`inbound_queue`] channel carries
//! chunks onto the thread that owns the module.

pub mod error;
pub mod inbound;
pub mod memory;
pub mod traits;
pub mod writer;

pub use error::{Result, TransportError};
pub use inbound::{inbound_queue, InboundChunk, InboundReceiver, InboundSender};
pub use memory::MemoryTransport;
pub use traits::Transport;
pub use writer::WriterTransport;
