use std::rc::Rc;

pub const DEFAULT_DEFINITION: &str = "No definition available";
pub const DEFAULT_DECK_NAME: &str = "English Vocabulary Phrases";
pub const DEFAULT_OUTPUT: &str = "vocab_deck.apkg";

/// Field names of the card template, in note field order.
pub const FIELD_NAMES: [&str; 5] = ["Phrase", "Type", "Structure", "Definition", "Lemma"];

/// One parsed CSV row. `phrase` is never empty and `definition` always carries a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabRow {
    pub phrase: String,
    /// Value of the `type` column.
    pub kind: String,
    pub structure: String,
    pub definition: String,
    pub lemma: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub id: i64,
    pub name: String,
    pub fields: Vec<String>,
    pub card_name: String,
    pub front: String,
    pub back: String,
    pub css: String,
}

/// One flashcard's data. Built from exactly one `VocabRow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabNote {
    pub template: Rc<CardTemplate>,
    pub fields: [String; 5],
    pub tags: Vec<String>,
}

impl VocabNote {
    pub fn phrase(&self) -> &str {
        &self.fields[0]
    }

    pub fn definition(&self) -> &str {
        &self.fields[3]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub template: Rc<CardTemplate>,
    pub notes: Vec<VocabNote>,
}

impl Deck {
    pub fn new(id: i64, name: impl Into<String>, template: Rc<CardTemplate>) -> Self {
        Self {
            id,
            name: name.into(),
            template,
            notes: Vec::new(),
        }
    }

    pub fn add_note(&mut self, note: VocabNote) {
        self.notes.push(note);
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
