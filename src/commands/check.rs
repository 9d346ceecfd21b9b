use std::collections::BTreeMap;

use crate::card::{Flashcard, kind_label};
use crate::loader::LoadedDeck;
use crate::palette::Palette;
use crate::utils::pluralize;

/// Print a plain styled summary of the deck the study command would use.
pub fn run(deck: &LoadedDeck) -> usize {
    println!("{}", Palette::ACCENT.paint("Deck Summary"));
    match &deck.source {
        Some(path) => println!(
            "{} {}",
            Palette::dim("Deck file:"),
            Palette::INFO.paint(path.display())
        ),
        None => println!(
            "{} {}",
            Palette::dim("Deck file:"),
            Palette::WARNING.paint("none found")
        ),
    }
    println!(
        "{} {}",
        Palette::dim("Cards:"),
        Palette::INFO.paint(deck.cards.len())
    );

    for (kind, count) in counts_by_kind(&deck.cards) {
        println!(
            "{} {}",
            Palette::dim(format!("  {}:", kind_label(&kind))),
            Palette::INFO.paint(pluralize("card", count))
        );
    }

    deck.cards.len()
}

fn counts_by_kind(cards: &[Flashcard]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.kind.clone()).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{SENTENCE_KIND, VOCABULARY_KIND};

    #[test]
    fn counts_are_grouped_and_sorted_by_kind() {
        let cards = vec![
            Flashcard::new(VOCABULARY_KIND, "书", "book"),
            Flashcard::new(SENTENCE_KIND, "你好", "hello"),
            Flashcard::new(VOCABULARY_KIND, "水", "water"),
        ];

        let counts = counts_by_kind(&cards);
        let entries: Vec<(String, usize)> = counts.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                (SENTENCE_KIND.to_string(), 1),
                (VOCABULARY_KIND.to_string(), 2),
            ]
        );
    }

    #[test]
    fn empty_deck_has_no_kind_rows() {
        assert!(counts_by_kind(&[]).is_empty());
    }
}
