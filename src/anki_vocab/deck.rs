use crate::ids::IdSource;
use crate::model::{CardTemplate, Deck, VocabNote};
use std::rc::Rc;

/// An empty deck with a fresh id.
pub fn create_deck<I: IdSource + ?Sized>(
    name: &str,
    template: Rc<CardTemplate>,
    ids: &mut I,
) -> Deck {
    let deck = Deck::new(ids.next_id(), name, template);
    log::debug!("deck '{}' id {}", deck.name, deck.id);
    deck
}

/// Appends `notes` in order.
pub fn add_notes(deck: &mut Deck, notes: Vec<VocabNote>) {
    for note in notes {
        deck.add_note(note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{SequenceIds, ID_MIN};
    use crate::model::VocabRow;
    use crate::notes::build_notes;
    use crate::template::create_card_model;

    fn rows(phrases: &[&str]) -> Vec<VocabRow> {
        phrases
            .iter()
            .map(|p| VocabRow {
                phrase: p.to_string(),
                kind: String::new(),
                structure: String::new(),
                definition: "def".into(),
                lemma: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_add_notes_keeps_order() {
        let mut ids = SequenceIds::default();
        let template = Rc::new(create_card_model(&mut ids));
        let mut deck = create_deck("Test Deck", Rc::clone(&template), &mut ids);

        add_notes(&mut deck, build_notes(&rows(&["c", "a", "b"]), &template));

        assert_eq!(deck.name, "Test Deck");
        assert_eq!(deck.len(), 3);
        let phrases: Vec<_> = deck.notes.iter().map(|n| n.phrase()).collect();
        assert_eq!(phrases, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_deck_id_drawn_after_model_id() {
        let mut ids = SequenceIds::default();
        let template = Rc::new(create_card_model(&mut ids));
        let deck = create_deck("D", template, &mut ids);

        assert_eq!(deck.template.id, ID_MIN);
        assert_eq!(deck.id, ID_MIN + 1);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_add_notes_appends() {
        let mut ids = SequenceIds::default();
        let template = Rc::new(create_card_model(&mut ids));
        let mut deck = create_deck("D", Rc::clone(&template), &mut ids);

        add_notes(&mut deck, build_notes(&rows(&["x"]), &template));
        add_notes(&mut deck, build_notes(&rows(&["y", "z"]), &template));

        let phrases: Vec<_> = deck.notes.iter().map(|n| n.phrase()).collect();
        assert_eq!(phrases, vec!["x", "y", "z"]);
    }
}
