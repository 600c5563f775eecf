//! En- and decodes Hearthstone deckstrings.
//!
//! A deckstring describes a Hearthstone deck as a compact base64 string: the
//! game format the deck was built for, its heroes, and its card inventory.
//! Every entity is referred to by its DBF ID, a numeric identifier unique per
//! Hearthstone entity. Mapping an ID to metadata (hero class, card cost, card
//! name) is out of scope here; the [HearthstoneJSON] database covers that.
//!
//! Underneath the base64 framing, the payload is a flat run of unsigned
//! LEB128 integers:
//!
//! - a reserved field, always 0
//! - the encoding version, see [`VERSION`]
//! - the deck's game format
//! - the hero count, followed by that many hero IDs
//! - three card groups, each a length followed by its entries:
//!   - cards the deck holds one copy of: card ID each
//!   - cards the deck holds two copies of: card ID each
//!   - cards with any other copy count: card ID and count pairs
//!
//! Deckstrings are canonical: heroes and cards are emitted in ascending ID
//! order, so two decks holding the same inventory encode to the same string
//! no matter how their fields are ordered. Decoding sorts the same way and
//! does not require sorted input.
//!
//! [HearthstoneJSON]: <https://hearthstonejson.com/>

pub mod de;
mod deck;
mod error;
pub mod ser;
mod varint;

pub use de::{from_reader, from_slice, from_str};
pub use deck::{CardCount, Deck, Format};
pub use error::{Error, Result};
pub use ser::{to_string, to_vec, to_writer};

/// The deckstring version supported by this crate.
///
/// Decoding a deckstring with any other version is rejected. All deckstrings
/// encoded by this crate carry this version.
pub const VERSION: u64 = 1;
