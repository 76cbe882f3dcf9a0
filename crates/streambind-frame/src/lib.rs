//! Wire-protocol framing for streambind.
//!
//! This is the boundary between a raw byte stream and discrete messages.
//! Four wire protocols are supported:
//! - **Lines**: terminator-delimited text
//! - **Raw**: each transport chunk is one frame
//! - **Data255**: frames delimited by the byte value 255
//! - **COBS**: zero-delimited frames, consistent-overhead byte stuffed
//!
//! [`FrameDecoder`] handles partial reads internally — callers always get
//! complete frames.

pub mod cobs;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod protocol;

pub use cobs::{cobs_decode, cobs_encode, MAX_COBS_BLOCK};
pub use decoder::{FrameDecoder, RawFrame};
pub use encoder::encode_payload;
pub use error::{FrameError, Result};
pub use protocol::{MessageStructure, WireProtocol};
