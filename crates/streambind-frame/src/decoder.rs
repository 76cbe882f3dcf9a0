use bytes::{Bytes, BytesMut};
use tracing::warn;

use crate::cobs::cobs_decode;
use crate::protocol::WireProtocol;

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// One discrete unit of input as delimited by the active wire protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFrame {
    /// A text line, terminators stripped.
    Line(String),
    /// A byte frame, delimiters removed.
    Bytes(Bytes),
}

impl RawFrame {
    /// Frame length in bytes (UTF-8 length for lines).
    pub fn len(&self) -> usize {
        match self {
            RawFrame::Line(line) => line.len(),
            RawFrame::Bytes(bytes) => bytes.len(),
        }
    }

    /// Whether the frame carries no payload.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Converts a raw byte stream into complete frames for one wire protocol.
///
/// Stateful and streaming: input may span multiple pushes, and any
/// incomplete trailing bytes are retained for the next call. Malformed COBS
/// blocks are dropped, logged and counted; they never fail the decoder.
#[derive(Debug)]
pub struct FrameDecoder {
    protocol: WireProtocol,
    buf: BytesMut,
    dropped: u64,
}

impl FrameDecoder {
    /// Create a decoder for `protocol`.
    pub fn new(protocol: WireProtocol) -> Self {
        Self {
            protocol,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            dropped: 0,
        }
    }

    /// The active wire protocol.
    pub fn protocol(&self) -> WireProtocol {
        self.protocol
    }

    /// Switch protocol, discarding any retained partial input.
    pub fn set_protocol(&mut self, protocol: WireProtocol) {
        self.protocol = protocol;
        self.buf.clear();
    }

    /// Number of malformed frames dropped so far.
    pub fn dropped_frames(&self) -> u64 {
        self.dropped
    }

    /// Feed a chunk of raw input and collect every complete frame it closes.
    pub fn push(&mut self, input: &[u8]) -> Vec<RawFrame> {
        match self.protocol {
            WireProtocol::Lines => self.push_lines(input),
            WireProtocol::Raw => {
                // The transport's chunk boundary is the frame boundary.
                vec![RawFrame::Bytes(Bytes::copy_from_slice(input))]
            }
            WireProtocol::Data255 => self.push_delimited(input, 0xFF, false),
            WireProtocol::Cobs => self.push_delimited(input, 0x00, true),
        }
    }

    fn push_lines(&mut self, input: &[u8]) -> Vec<RawFrame> {
        self.buf.extend_from_slice(input);

        let mut frames = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n' || b == b'\r') {
            let segment = self.buf.split_to(pos + 1);
            let line = &segment[..pos];
            if line.is_empty() {
                continue;
            }
            frames.push(RawFrame::Line(
                String::from_utf8_lossy(line).into_owned(),
            ));
        }
        frames
    }

    fn push_delimited(&mut self, input: &[u8], delimiter: u8, cobs: bool) -> Vec<RawFrame> {
        self.buf.extend_from_slice(input);

        let mut frames = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == delimiter) {
            let segment = self.buf.split_to(pos + 1);
            let block = &segment[..pos];
            if block.is_empty() {
                continue;
            }
            if cobs {
                match cobs_decode(block) {
                    Ok(payload) => frames.push(RawFrame::Bytes(Bytes::from(payload))),
                    Err(err) => {
                        self.dropped += 1;
                        warn!(error = %err, bytes = ?block, "dropping malformed COBS frame");
                    }
                }
            } else {
                frames.push(RawFrame::Bytes(Bytes::copy_from_slice(block)));
            }
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cobs::cobs_encode;

    #[test]
    fn lines_split_and_strip_terminators() {
        let mut decoder = FrameDecoder::new(WireProtocol::Lines);
        let frames = decoder.push(b"Speed 10\r\nHue 0.5\n");
        assert_eq!(
            frames,
            vec![
                RawFrame::Line("Speed 10".to_string()),
                RawFrame::Line("Hue 0.5".to_string()),
            ]
        );
    }

    #[test]
    fn lines_retain_partial_input() {
        let mut decoder = FrameDecoder::new(WireProtocol::Lines);
        assert!(decoder.push(b"Spee").is_empty());
        assert!(decoder.push(b"d 10").is_empty());
        let frames = decoder.push(b"\n");
        assert_eq!(frames, vec![RawFrame::Line("Speed 10".to_string())]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut decoder = FrameDecoder::new(WireProtocol::Lines);
        let frames = decoder.push(b"\r\n\na\n\r\n");
        assert_eq!(frames, vec![RawFrame::Line("a".to_string())]);
    }

    #[test]
    fn raw_passes_each_chunk_through() {
        let mut decoder = FrameDecoder::new(WireProtocol::Raw);
        let frames = decoder.push(&[10, 20, 30, 40]);
        assert_eq!(
            frames,
            vec![RawFrame::Bytes(Bytes::from_static(&[10, 20, 30, 40]))]
        );
        // No buffering: the next chunk is its own frame.
        let frames = decoder.push(&[1]);
        assert_eq!(frames, vec![RawFrame::Bytes(Bytes::from_static(&[1]))]);
    }

    #[test]
    fn data255_splits_on_terminator_byte() {
        let mut decoder = FrameDecoder::new(WireProtocol::Data255);
        let frames = decoder.push(&[1, 2, 255, 3, 4]);
        assert_eq!(frames, vec![RawFrame::Bytes(Bytes::from_static(&[1, 2]))]);
        let frames = decoder.push(&[5, 255]);
        assert_eq!(
            frames,
            vec![RawFrame::Bytes(Bytes::from_static(&[3, 4, 5]))]
        );
    }

    #[test]
    fn cobs_frames_roundtrip_through_decoder() {
        let mut decoder = FrameDecoder::new(WireProtocol::Cobs);
        let payload = [1u8, 0, 2, 0, 0, 3];
        let wire = cobs_encode(&payload).unwrap();

        // Deliver one byte at a time to exercise the retained buffer.
        let mut frames = Vec::new();
        for b in wire {
            frames.extend(decoder.push(&[b]));
        }
        assert_eq!(frames, vec![RawFrame::Bytes(Bytes::copy_from_slice(&payload))]);
        assert_eq!(decoder.dropped_frames(), 0);
    }

    #[test]
    fn malformed_cobs_block_is_dropped_and_counted() {
        let mut decoder = FrameDecoder::new(WireProtocol::Cobs);
        // Overhead byte claims 5 data bytes but only 1 follows.
        let frames = decoder.push(&[0x05, 0x11, 0x00]);
        assert!(frames.is_empty());
        assert_eq!(decoder.dropped_frames(), 1);

        // Subsequent well-formed frames still decode.
        let wire = cobs_encode(b"ok").unwrap();
        let frames = decoder.push(&wire);
        assert_eq!(frames, vec![RawFrame::Bytes(Bytes::from_static(b"ok"))]);
    }

    #[test]
    fn consecutive_delimiters_yield_no_empty_frames() {
        let mut decoder = FrameDecoder::new(WireProtocol::Data255);
        let frames = decoder.push(&[255, 255, 7, 255]);
        assert_eq!(frames, vec![RawFrame::Bytes(Bytes::from_static(&[7]))]);
    }

    #[test]
    fn protocol_switch_discards_partial_input() {
        let mut decoder = FrameDecoder::new(WireProtocol::Data255);
        assert!(decoder.push(&[1, 2, 3]).is_empty());
        decoder.set_protocol(WireProtocol::Lines);
        let frames = decoder.push(b"fresh\n");
        assert_eq!(frames, vec![RawFrame::Line("fresh".to_string())]);
    }
}
