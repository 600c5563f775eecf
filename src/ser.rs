//! Deckstring encoding.

use std::io;

use base64::prelude::*;

use crate::deck::{CardCount, Deck};
use crate::error::{Error, Result};
use crate::varint;

/// Encodes a deck into a deckstring.
///
/// The output is canonical: heroes and cards are written in ascending ID
/// order regardless of their order in `deck`, so two decks holding the same
/// inventory produce the same deckstring.
///
/// # Errors
///
/// Returns [`Error::InvalidCardCount`] if any card's copy count is zero.
pub fn to_string(deck: &Deck) -> Result<String> {
    Ok(BASE64_STANDARD.encode(to_vec(deck)?))
}

/// Encodes a deck into its raw payload bytes, without the base64 framing.
///
/// The resulting buffer has exactly the length required.
///
/// # Errors
///
/// Returns [`Error::InvalidCardCount`] if any card's copy count is zero.
pub fn to_vec(deck: &Deck) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    to_writer(&mut buf, deck)?;
    Ok(buf)
}

/// Encodes a deck into a [`io::Write`] as raw payload bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidCardCount`] if any card's copy count is zero, or
/// the error of the writer if it fails.
pub fn to_writer<W: io::Write>(mut writer: W, deck: &Deck) -> Result<()> {
    let header = [0, crate::VERSION, deck.format.0, deck.heroes.len() as u64];
    varint::write_many(&mut writer, &header)?;

    let mut heroes = deck.heroes.clone();
    heroes.sort_unstable();
    varint::write_many(&mut writer, &heroes)?;

    // gather the cards into groups based on their count in the deck. there
    // are only three: 1x cards, 2x cards, and any other multiple
    let mut groups: [Vec<CardCount>; 3] = [const { Vec::new() }; 3];
    for &card in &deck.cards {
        let group = match card.count {
            0 => return Err(Error::InvalidCardCount(card.dbf_id)),
            1 => 0usize,
            2 => 1,
            _ => 2,
        };

        groups[group].push(card);
    }

    for group in &mut groups {
        group.sort_unstable_by_key(|card| card.dbf_id);
    }

    for (index, group) in groups.iter().enumerate() {
        varint::write(&mut writer, group.len() as u64)?;

        for card in group {
            varint::write(&mut writer, card.dbf_id)?;

            // cards with an unusual count also spell the count out
            if index == 2 {
                varint::write(&mut writer, card.count)?;
            }
        }
    }

    Ok(())
}
