/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload exceeds the single-block COBS limit.
    #[error("payload too large for a single COBS block ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// A COBS block contains a zero byte where only stuffed data may appear.
    #[error("zero byte inside COBS block")]
    ZeroInBlock,

    /// A COBS overhead byte points past the end of the block.
    #[error("COBS block truncated (overhead byte points past end)")]
    Truncated,
}

pub type Result<T> = std::result::Result<T, FrameError>;
