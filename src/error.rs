/// Errors returned while building a QR Code symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    /// The encoded message doesn't fit in the chosen version/EC level.
    #[error(
        "message exceeds data capacity ({used} bits used, {capacity} bits available); \
         increase version, decrease error correction level or shorten message"
    )]
    CapacityExceeded { used: usize, capacity: usize },

    /// A caller-supplied parameter is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
