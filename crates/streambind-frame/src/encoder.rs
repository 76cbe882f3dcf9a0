use crate::cobs::cobs_encode;
use crate::error::Result;
use crate::protocol::WireProtocol;

/// Produce the exact bytes to place on the wire for an outgoing payload.
///
/// Lines, Raw and Data255 pass through unchanged — line endings are the
/// route formatter's concern, and Data255 escaping is the sender's. COBS
/// stuffs the payload and appends the zero delimiter; payloads over the
/// single-block limit are rejected.
pub fn encode_payload(protocol: WireProtocol, payload: &[u8]) -> Result<Vec<u8>> {
    match protocol {
        WireProtocol::Cobs => cobs_encode(payload),
        WireProtocol::Lines | WireProtocol::Raw | WireProtocol::Data255 => Ok(payload.to_vec()),
    }
}
