use crate::model::{CardTemplate, VocabNote, VocabRow};
use std::rc::Rc;

/// Maps a row onto the template's field order. The row's type becomes the only tag.
pub fn build_note(row: &VocabRow, template: &Rc<CardTemplate>) -> VocabNote {
    let tags = if row.kind.is_empty() {
        Vec::new()
    } else {
        vec![row.kind.clone()]
    };

    VocabNote {
        template: Rc::clone(template),
        fields: [
            row.phrase.clone(),
            row.kind.clone(),
            row.structure.clone(),
            row.definition.clone(),
            row.lemma.clone(),
        ],
        tags,
    }
}

pub fn build_notes(rows: &[VocabRow], template: &Rc<CardTemplate>) -> Vec<VocabNote> {
    rows.iter().map(|row| build_note(row, template)).collect()
}
