use thiserror::Error;

/// Errors produced by credential handling.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Stored hash is not in the expected `"salt:digest"` shape.
    #[error("Malformed stored password hash")]
    MalformedHash,

    /// Hex decoding error inside a stored hash.
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}
