use crate::error::{FrameError, Result};

/// Maximum payload length for a single COBS block.
///
/// A block's overhead byte counts up to 254 data bytes before the next
/// implied zero; longer payloads would need block chaining, which this codec
/// rejects rather than silently splitting.
pub const MAX_COBS_BLOCK: usize = 254;

/// COBS-encode a payload into wire bytes, including the trailing zero
/// delimiter.
///
/// Output length is at most `payload.len() + 2` (one overhead byte plus the
/// delimiter). Payloads longer than [`MAX_COBS_BLOCK`] are rejected.
pub fn cobs_encode(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > MAX_COBS_BLOCK {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_COBS_BLOCK,
        });
    }

    let mut out = Vec::with_capacity(payload.len() + 2);
    let mut code_idx = 0usize;
    let mut code = 1u8;
    out.push(0);

    for &b in payload {
        if b == 0 {
            out[code_idx] = code;
            code_idx = out.len();
            out.push(0);
            code = 1;
        } else {
            out.push(b);
            code += 1;
        }
    }

    out[code_idx] = code;
    out.push(0);
    Ok(out)
}

/// Decode one COBS block (the bytes between two zero delimiters, delimiters
/// excluded) back into the original payload.
pub fn cobs_decode(block: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(block.len());
    let mut i = 0usize;

    while i < block.len() {
        let code = block[i] as usize;
        if code == 0 {
            return Err(FrameError::ZeroInBlock);
        }
        let end = i + code;
        if end > block.len() {
            return Err(FrameError::Truncated);
        }
        out.extend_from_slice(&block[i + 1..end]);
        i = end;
        if code < 0xFF && i < block.len() {
            out.push(0);
        }
    }

    Ok(out)
}
