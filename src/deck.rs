//! The deck data model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::de;
use crate::error::Error;

/// The game format a deck was built for.
///
/// [`Format::WILD`] and [`Format::STANDARD`] are the current Hearthstone game
/// formats. The codec doesn't enforce an enumeration: any [`u64`] value
/// round-trips through a deckstring unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Format(pub u64);

impl Format {
    /// The Wild game format.
    pub const WILD: Self = Self(1);
    /// The Standard game format.
    pub const STANDARD: Self = Self(2);
}

impl From<u64> for Format {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Format> for u64 {
    fn from(format: Format) -> Self {
        format.0
    }
}

/// One entry of a deck's card inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCount {
    /// The card's DBF ID.
    pub dbf_id: u64,
    /// How many copies of the card the deck holds.
    ///
    /// Typically 1 or 2. Greater counts are valid but rarely seen; a count of
    /// 0 is invalid and rejected when encoding.
    pub count: u64,
}

/// A Hearthstone deck: game format, heroes, and card inventory.
///
/// `heroes` holds the DBF IDs of the specific characters the deck was built
/// for (e.g. Malfurion or Lunara, not the Druid class). The encoding permits
/// any number of heroes, though Hearthstone decks carry exactly one.
///
/// `cards` pairs each card's DBF ID with its copy count. The counts of a
/// playable deck sum to 30, but a deckstring can describe an inventory of any
/// size.
///
/// Decoded decks are canonical: `heroes` ascending by ID, `cards` ascending
/// by DBF ID. Encoding accepts any order and sorts while writing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// The game format this deck targets.
    pub format: Format,
    /// DBF IDs of the deck's heroes.
    pub heroes: Vec<u64>,
    /// The deck's card inventory.
    pub cards: Vec<CardCount>,
}

impl FromStr for Deck {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        de::from_str(s)
    }
}
