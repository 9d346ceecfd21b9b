use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::card::Flashcard;
use crate::utils::data_dir;

/// The two deck file shapes accepted: an object wrapping the card list under
/// a `flashcards` field, or the bare list itself.
#[derive(Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Wrapped { flashcards: Vec<Flashcard> },
    Bare(Vec<Flashcard>),
}

impl DeckFile {
    fn into_cards(self) -> Vec<Flashcard> {
        match self {
            DeckFile::Wrapped { flashcards } => flashcards,
            DeckFile::Bare(cards) => cards,
        }
    }
}

/// A loaded deck plus the file it came from, for summary output.
#[derive(Debug)]
pub struct LoadedDeck {
    pub cards: Vec<Flashcard>,
    pub source: Option<PathBuf>,
}

/// Probe the candidate deck locations in order and parse the first one that
/// exists and matches a recognized shape. Nothing in here is a hard failure:
/// a candidate that exists but does not parse is skipped, and running out of
/// candidates yields an empty deck.
pub fn load_deck(explicit: Option<&Path>) -> LoadedDeck {
    probe(candidate_paths(explicit))
}

fn probe(candidates: Vec<PathBuf>) -> LoadedDeck {
    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }
        if let Some(cards) = parse_deck_file(&candidate) {
            return LoadedDeck {
                cards,
                source: Some(candidate),
            };
        }
    }
    LoadedDeck {
        cards: Vec::new(),
        source: None,
    }
}

fn parse_deck_file(path: &Path) -> Option<Vec<Flashcard>> {
    let contents = fs::read_to_string(path).ok()?;
    let deck: DeckFile = serde_json::from_str(&contents).ok()?;
    Some(deck.into_cards())
}

fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
    }
    candidates.push(PathBuf::from("data.json"));
    candidates.push(PathBuf::from("..").join("data.json"));
    if let Some(dir) = data_dir() {
        candidates.push(dir.join("flashcards.json"));
    }
    candidates
}
