//! Deckstring decoding.

use std::io;

use base64::prelude::*;

use crate::deck::{CardCount, Deck, Format};
use crate::error::{Error, Result};
use crate::varint;

/// Decodes a deckstring into a [`Deck`].
///
/// The result is canonical: `heroes` and `cards` come out sorted by ID
/// ascending, no matter the order they were encoded in.
///
/// # Errors
///
/// Returns an error if the input is not valid standard base64, if the
/// deckstring version is unsupported, or if the payload layout is invalid.
pub fn from_str(deckstring: &str) -> Result<Deck> {
    let buf = BASE64_STANDARD.decode(deckstring)?;
    from_slice(&buf)
}

/// Decodes a [`Deck`] from its raw payload bytes, without the base64 framing.
///
/// Bytes past the end of the layout are ignored.
///
/// # Errors
///
/// Returns an error if the payload layout is invalid.
pub fn from_slice(buf: &[u8]) -> Result<Deck> {
    from_reader(buf)
}

/// Decodes a [`Deck`] from a [`io::Read`] yielding raw payload bytes.
///
/// The reader may still have bytes available when this function returns
/// successfully.
///
/// # Errors
///
/// Returns an error if the payload layout is invalid or the reader fails.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Deck> {
    let [reserved, version, format, hero_count] = varint::read_array(&mut reader)?;

    if reserved != 0 {
        return Err(Error::InvalidReserved(reserved));
    }

    if version != crate::VERSION {
        return Err(Error::UnsupportedVersion(version));
    }

    let mut heroes = varint::read_vec(&mut reader, hero_count)?;
    heroes.sort_unstable();

    let mut cards = Vec::with_capacity(30);
    for group in 1u64..=3 {
        let len = varint::read(&mut reader)?;
        for _ in 0..len {
            let dbf_id = varint::read(&mut reader)?;

            // the first two groups imply the copy count, the last group
            // spells it out per entry
            let count = if group >= 3 {
                varint::read(&mut reader)?
            } else {
                group
            };

            cards.push(CardCount { dbf_id, count });
        }
    }

    cards.sort_unstable_by_key(|card| card.dbf_id);

    Ok(Deck {
        format: Format(format),
        heroes,
        cards,
    })
}
