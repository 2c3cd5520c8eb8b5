//! # Packaging Layer
//!
//! A [`Packager`] turns one [`Deck`] (and the template it references) into a file the
//! flashcard application can import.
//!
//! ## Implementations
//!
//! - [`AnkiPackager`]: writes an `.apkg` through `genanki-rs`. The package layout,
//!   template rendering and note GUIDs are the library's business.
//! - [`MemoryPackager`]: records what would have been written, for tests.
//!
//! Writing overwrites whatever is at the target path.

use crate::error::{Result, VocabError};
use crate::model::{CardTemplate, Deck, VocabNote};
use std::path::Path;

pub trait Packager {
    fn write_package(&self, deck: &Deck, path: &Path) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct AnkiPackager;

impl AnkiPackager {
    pub fn new() -> Self {
        Self
    }

    fn model(template: &CardTemplate) -> genanki_rs::Model {
        let fields = template
            .fields
            .iter()
            .map(|name| genanki_rs::Field::new(name))
            .collect();
        let card = genanki_rs::Template::new(&template.card_name)
            .qfmt(&template.front)
            .afmt(&template.back);

        genanki_rs::Model::new_with_options(
            template.id,
            &template.name,
            fields,
            vec![card],
            Some(template.css.as_str()),
            None,
            None,
            None,
            None,
        )
    }

    fn note(model: &genanki_rs::Model, note: &VocabNote) -> Result<genanki_rs::Note> {
        let tags: Vec<String> = note.tags.iter().map(|t| anki_tag(t)).collect();
        genanki_rs::Note::new_with_options(
            model.clone(),
            note.fields.iter().map(String::as_str).collect(),
            None,
            Some(tags.iter().map(String::as_str).collect()),
            None,
        )
        .map_err(package_error)
    }
}

impl Packager for AnkiPackager {
    fn write_package(&self, deck: &Deck, path: &Path) -> Result<()> {
        let target = path.to_str().ok_or_else(|| {
            VocabError::Package(format!("output path is not valid UTF-8: {}", path.display()))
        })?;

        let model = Self::model(&deck.template);
        let mut anki_deck = genanki_rs::Deck::new(deck.id, &deck.name, "");
        for note in &deck.notes {
            anki_deck.add_note(Self::note(&model, note)?);
        }

        log::debug!("writing {} notes to {}", deck.len(), target);
        let mut package = genanki_rs::Package::new(vec![anki_deck], vec![]).map_err(package_error)?;
        package.write_to_file(target).map_err(package_error)
    }
}

/// Anki separates tags with spaces, so whitespace inside one tag becomes `_`.
pub fn anki_tag(tag: &str) -> String {
    tag.split_whitespace().collect::<Vec<_>>().join("_")
}

fn package_error(e: genanki_rs::Error) -> VocabError {
    VocabError::Package(e.to_string())
}

#[cfg(any(test, feature = "test_utils"))]
pub use memory::MemoryPackager;

#[cfg(any(test, feature = "test_utils"))]
mod memory {
    use super::Packager;
    use crate::error::{Result, VocabError};
    use crate::model::Deck;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Keeps written decks in memory. Can be told to fail to exercise error paths.
    #[derive(Debug, Default)]
    pub struct MemoryPackager {
        written: RefCell<Vec<(PathBuf, Deck)>>,
        fail_with: Option<String>,
    }

    impl MemoryPackager {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                written: RefCell::default(),
                fail_with: Some(message.into()),
            }
        }

        pub fn written(&self) -> Vec<(PathBuf, Deck)> {
            self.written.borrow().clone()
        }
    }

    impl Packager for MemoryPackager {
        fn write_package(&self, deck: &Deck, path: &Path) -> Result<()> {
            if let Some(message) = &self.fail_with {
                return Err(VocabError::Package(message.clone()));
            }
            self.written
                .borrow_mut()
                .push((path.to_path_buf(), deck.clone()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{add_notes, create_deck};
    use crate::ids::{SequenceIds, ID_MIN};
    use crate::model::VocabRow;
    use crate::notes::build_notes;
    use crate::template::create_card_model;
    use std::fs;
    use std::io::Read;
    use std::rc::Rc;

    fn sample_deck() -> Deck {
        let mut ids = SequenceIds::default();
        let template = Rc::new(create_card_model(&mut ids));
        let rows = vec![
            VocabRow {
                phrase: "hello world".into(),
                kind: "greeting".into(),
                structure: "interjection".into(),
                definition: "a friendly greeting".into(),
                lemma: "".into(),
            },
            VocabRow {
                phrase: "give up".into(),
                kind: "phrasal verb".into(),
                structure: "v + particle".into(),
                definition: "to stop trying".into(),
                lemma: "give".into(),
            },
        ];
        let mut deck = create_deck("Sample", Rc::clone(&template), &mut ids);
        add_notes(&mut deck, build_notes(&rows, &template));
        deck
    }

    /// Raw bytes of the SQLite collection inside a written package.
    fn collection_bytes(path: &Path) -> Vec<u8> {
        let mut archive = zip::ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
        let mut entry = archive.by_name("collection.anki2").unwrap();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        bytes
    }

    fn occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|window| *window == needle)
            .count()
    }

    #[test]
    fn test_anki_tag() {
        assert_eq!(anki_tag("greeting"), "greeting");
        assert_eq!(anki_tag("phrasal verb"), "phrasal_verb");
        assert_eq!(anki_tag(" a  b "), "a_b");
    }

    #[test]
    fn test_anki_packager_writes_zip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.apkg");

        AnkiPackager::new()
            .write_package(&sample_deck(), &path)
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_anki_packager_writes_notes_model_and_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.apkg");
        let deck = sample_deck();

        AnkiPackager::new().write_package(&deck, &path).unwrap();
        let db = collection_bytes(&path);

        let greeting = b"hello world\x1fgreeting\x1finterjection\x1fa friendly greeting\x1f";
        let give_up = b"give up\x1fphrasal verb\x1fv + particle\x1fto stop trying\x1fgive";
        assert_eq!(occurrences(&db, greeting), 1);
        assert_eq!(occurrences(&db, give_up), 1);
        assert_eq!(occurrences(&db, b"greeting\x1fhello world"), 0);

        assert!(occurrences(&db, b"phrasal_verb") >= 1);

        assert_eq!(deck.template.id, ID_MIN);
        assert_eq!(deck.id, ID_MIN + 1);
        assert!(occurrences(&db, deck.template.id.to_string().as_bytes()) >= 1);
        assert!(occurrences(&db, deck.id.to_string().as_bytes()) >= 1);
        assert!(occurrences(&db, b"Vocabulary Phrase Model") >= 1);
        assert!(occurrences(&db, b"Sample") >= 1);
    }

    #[test]
    fn test_anki_packager_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.apkg");
        fs::write(&path, "stale").unwrap();

        AnkiPackager::new()
            .write_package(&sample_deck(), &path)
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_anki_packager_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.apkg");

        let err = AnkiPackager::new()
            .write_package(&sample_deck(), &path)
            .unwrap_err();
        assert!(matches!(err, VocabError::Package(_)));
    }

    #[test]
    fn test_memory_packager_records() {
        let packager = MemoryPackager::new();
        let deck = sample_deck();
        packager
            .write_package(&deck, Path::new("deck.apkg"))
            .unwrap();

        let written = packager.written();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, Path::new("deck.apkg"));
        assert_eq!(written[0].1, deck);
    }

    #[test]
    fn test_memory_packager_failing() {
        let packager = MemoryPackager::failing("disk full");
        let err = packager
            .write_package(&sample_deck(), Path::new("deck.apkg"))
            .unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        assert!(packager.written().is_empty());
    }
}
