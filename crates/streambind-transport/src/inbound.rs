use std::sync::mpsc;

/// One unit of inbound data as delivered by a transport.
///
/// Transports that split on line boundaries themselves (serial line mode,
/// telnet-style sockets) deliver [`InboundChunk::Line`]; everything else
/// delivers raw byte chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundChunk {
    Bytes(Vec<u8>),
    Line(String),
}

/// Sending half of an inbound marshaling queue. Cheap to clone; lives on the
/// I/O thread.
#[derive(Debug, Clone)]
pub struct InboundSender {
    tx: mpsc::Sender<InboundChunk>,
}

impl InboundSender {
    /// Queue a raw byte chunk. Returns false if the receiving side is gone.
    pub fn push_bytes(&self, bytes: &[u8]) -> bool {
        self.tx.send(InboundChunk::Bytes(bytes.to_vec())).is_ok()
    }

    /// Queue a pre-split text line. Returns false if the receiving side is gone.
    pub fn push_line(&self, line: &str) -> bool {
        self.tx.send(InboundChunk::Line(line.to_string())).is_ok()
    }
}

/// Receiving half of an inbound marshaling queue. Lives on the thread that
/// owns the module; never blocks.
#[derive(Debug)]
pub struct InboundReceiver {
    rx: mpsc::Receiver<InboundChunk>,
}

impl InboundReceiver {
    /// Drain every chunk queued so far without blocking.
    pub fn drain(&self) -> Vec<InboundChunk> {
        self.rx.try_iter().collect()
    }
}

/// Create a connected sender/receiver pair.
pub fn inbound_queue() -> (InboundSender, InboundReceiver) {
    let (tx, rx) = mpsc::channel();
    (InboundSender { tx }, InboundReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_arrive_in_order() {
        let (tx, rx) = inbound_queue();
        assert!(tx.push_bytes(&[1, 2, 3]));
        assert!(tx.push_line("hello"));

        let chunks = rx.drain();
        assert_eq!(
            chunks,
            vec![
                InboundChunk::Bytes(vec![1, 2, 3]),
                InboundChunk::Line("hello".to_string()),
            ]
        );
        assert!(rx.drain().is_empty());
    }

    #[test]
    fn crosses_threads() {
        let (tx, rx) = inbound_queue();
        let handle = std::thread::spawn(move || {
            for i in 0..16u8 {
                assert!(tx.push_bytes(&[i]));
            }
        });
        handle.join().unwrap();

        let chunks = rx.drain();
        assert_eq!(chunks.len(), 16);
        assert_eq!(chunks[0], InboundChunk::Bytes(vec![0]));
        assert_eq!(chunks[15], InboundChunk::Bytes(vec![15]));
    }

    #[test]
    fn push_fails_after_receiver_drops() {
        let (tx, rx) = inbound_queue();
        drop(rx);
        assert!(!tx.push_line("late"));
    }
}
