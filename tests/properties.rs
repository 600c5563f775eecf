//! Property tests for the codec's round-trip and canonicalization contract.
#![allow(unused_crate_dependencies)]

use deckstrings::{CardCount, Deck, Format};
use proptest::prelude::*;

/// Decks with up to 4 heroes and 40 distinct cards, counts spanning all three
/// wire groups.
fn arb_deck() -> impl Strategy<Value = Deck> {
    let heroes = proptest::collection::vec(any::<u64>(), 0..4);
    let cards = proptest::collection::btree_map(any::<u64>(), 1..2000u64, 0..40);

    (any::<u64>(), heroes, cards).prop_map(|(format, heroes, cards)| Deck {
        format: Format(format),
        heroes,
        cards: cards
            .into_iter()
            .map(|(dbf_id, count)| CardCount { dbf_id, count })
            .collect(),
    })
}

fn canonical(mut deck: Deck) -> Deck {
    deck.heroes.sort_unstable();
    deck.cards.sort_unstable_by_key(|card| card.dbf_id);
    deck
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_then_decode(deck in arb_deck()) {
        let deckstring = deckstrings::to_string(&deck).expect("encoding failed");
        let decoded = deckstrings::from_str(&deckstring).expect("decoding failed");
        prop_assert_eq!(decoded, canonical(deck));
    }

    #[test]
    fn decode_then_encode(deck in arb_deck()) {
        let deckstring = deckstrings::to_string(&deck).expect("encoding failed");
        let decoded = deckstrings::from_str(&deckstring).expect("decoding failed");
        let reencoded = deckstrings::to_string(&decoded).expect("re-encoding failed");
        prop_assert_eq!(deckstring, reencoded);
    }

    #[test]
    fn encode_ignores_input_order(deck in arb_deck()) {
        let mut reversed = deck.clone();
        reversed.heroes.reverse();
        reversed.cards.reverse();

        let p = deckstrings::to_string(&deck).expect("encoding failed");
        let q = deckstrings::to_string(&reversed).expect("encoding failed");
        prop_assert_eq!(p, q);
    }

    #[test]
    fn implicit_count_groups_stay_small(count in 1..2000u64) {
        // a lone card must cost one varint per copy-count field only when the
        // count isn't 1 or 2
        let deck = Deck {
            format: Format(0),
            heroes: Vec::new(),
            cards: vec![CardCount { dbf_id: 1, count }],
        };

        let buf = deckstrings::to_vec(&deck).expect("encoding failed");
        // header (4) + group lengths (3) + card id (1)
        let expected = if count <= 2 { 8 } else { 8 + varint_len(count) };
        prop_assert_eq!(buf.len(), expected);
    }
}

fn varint_len(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    usize::try_from(bits.div_ceil(7).max(1)).expect("length fits usize")
}
