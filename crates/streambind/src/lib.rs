//! Streaming protocol framing and value binding.
//!
//! streambind turns byte streams from serial-style links into typed,
//! named value slots, and routes application values back onto the wire.
//!
//! # Crate Structure
//!
//! - [`transport`] — Outbound transport trait and inbound chunk queue
//! - [`frame`] — Wire protocols, frame decoding and COBS
//! - [`values`] — Message parsing and the value binding table
//! - [`module`] — The streaming module orchestrator

/// Re-export transport types.
pub mod transport {
    pub use streambind_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use streambind_frame::*;
}

/// Re-export value parsing and binding types.
pub mod values {
    pub use streambind_values::*;
}

/// Re-export the module orchestrator.
pub mod module {
    pub use streambind_module::*;
}
