use crate::commands::{CmdMessage, CmdResult};
use crate::deck::{add_notes, create_deck};
use crate::error::Result;
use crate::ids::IdSource;
use crate::notes::build_notes;
use crate::package::Packager;
use crate::parser::RowParser;
use crate::template::create_card_model;
use std::path::Path;
use std::rc::Rc;

/// CSV in, package out. Nothing is written unless every row parsed.
///
/// Each progress message goes to `report` as soon as its stage completes, so a caller
/// still sees how far the run got when a later stage fails.
pub fn run<P: Packager + ?Sized, I: IdSource + ?Sized>(
    packager: &P,
    ids: &mut I,
    parser: &RowParser,
    input: &Path,
    output: &Path,
    deck_name: &str,
    report: &mut dyn FnMut(&CmdMessage),
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut emit = |result: &mut CmdResult, message: CmdMessage| {
        report(&message);
        result.add_message(message);
    };

    emit(
        &mut result,
        CmdMessage::info(format!("📚 Creating Anki deck from: {}", input.display())),
    );

    let template = Rc::new(create_card_model(ids));
    emit(&mut result, CmdMessage::success("✅ Card model created"));

    let mut deck = create_deck(deck_name, Rc::clone(&template), ids);
    emit(
        &mut result,
        CmdMessage::success(format!("✅ Deck '{}' created", deck_name)),
    );

    let rows = parser.parse_csv(input)?;
    add_notes(&mut deck, build_notes(&rows, &template));
    emit(
        &mut result,
        CmdMessage::success(format!("✅ Added {} cards to deck", deck.len())),
    );

    packager.write_package(&deck, output)?;
    emit(
        &mut result,
        CmdMessage::success(format!("🎉 Successfully created: {}", output.display())),
    );
    emit(
        &mut result,
        CmdMessage::info(format!("📊 Total cards: {}", deck.len())),
    );
    emit(
        &mut result,
        CmdMessage::info(format!(
            "\n💡 Import this file into Anki: File → Import → {}",
            output.display()
        )),
    );

    Ok(result.with_deck(deck).with_output(output.to_path_buf()))
}
