//! # API Facade
//!
//! A thin facade over the command layer. It owns the collaborators a run needs (the
//! packager, the id source and the row parser) so callers only pass paths and names.
//!
//! `VocabApi<P, I>` is generic over both:
//! - Production: `VocabApi<AnkiPackager, RandomIds>`
//! - Testing: `VocabApi<MemoryPackager, SequenceIds>`
//!
//! Like the commands it wraps, the facade never prints and never exits.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::ids::{IdSource, RandomIds};
use crate::package::{AnkiPackager, Packager};
use crate::parser::RowParser;
use std::path::Path;

pub struct VocabApi<P: Packager, I: IdSource> {
    packager: P,
    ids: I,
    parser: RowParser,
}

impl VocabApi<AnkiPackager, RandomIds> {
    /// Production wiring: genanki packaging, random ids, definition default from `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(AnkiPackager::new(), RandomIds)
            .with_parser(RowParser::with_default_definition(&config.default_definition))
    }
}

impl<P: Packager, I: IdSource> VocabApi<P, I> {
    pub fn new(packager: P, ids: I) -> Self {
        Self {
            packager,
            ids,
            parser: RowParser::default(),
        }
    }

    pub fn with_parser(mut self, parser: RowParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn packager(&self) -> &P {
        &self.packager
    }

    pub fn create_anki_deck(
        &mut self,
        input: &Path,
        output: &Path,
        deck_name: &str,
    ) -> Result<CmdResult> {
        self.create_anki_deck_reporting(input, output, deck_name, &mut |_: &CmdMessage| {})
    }

    /// Like [`create_anki_deck`](Self::create_anki_deck), handing each progress message to
    /// `report` as its stage completes.
    pub fn create_anki_deck_reporting(
        &mut self,
        input: &Path,
        output: &Path,
        deck_name: &str,
        report: &mut dyn FnMut(&CmdMessage),
    ) -> Result<CmdResult> {
        commands::generate::run(
            &self.packager,
            &mut self.ids,
            &self.parser,
            input,
            output,
            deck_name,
            report,
        )
    }
}
