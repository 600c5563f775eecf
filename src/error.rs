//! Error handling types.
//!
//! Decoding and encoding share one error type. Every failure aborts the
//! current call and is returned to the caller; nothing is retried or papered
//! over with a default.

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Potential errors to encounter when decoding or encoding a deckstring.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The deckstring is not valid standard base64.
    #[error("deckstring is not valid base64")]
    Base64(#[from] base64::DecodeError),
    /// The error originated from the [`io::Read`] or [`io::Write`]
    /// implementation.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The data ended before the deck layout was complete.
    #[error("unexpected end of deckstring data")]
    UnexpectedEof,
    /// A LEB128 encoded integer overflows [`u64`].
    #[error("LEB encoded integer overflows u64")]
    IntegerOverflow,
    /// The reserved header field was non-zero.
    #[error("unexpected reserved byte: {0}")]
    InvalidReserved(u64),
    /// The version header field doesn't match [`VERSION`](crate::VERSION).
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u64),
    /// A card's copy count was zero when encoding. Carries the card's DBF ID.
    #[error("invalid card count for DBF ID {0}")]
    InvalidCardCount(u64),
}
