//! The vocabulary card template.
//!
//! One card type: the front shows the phrase with its type and structure, the back adds the
//! definition and, when the note has one, the lemma. The lemma block uses Anki's
//! `{{#Field}}...{{/Field}}` section syntax, so Anki decides whether it renders.

use crate::ids::IdSource;
use crate::model::{CardTemplate, FIELD_NAMES};

pub const MODEL_NAME: &str = "Vocabulary Phrase Model";
pub const CARD_NAME: &str = "Phrase Card";

const FRONT: &str = r#"<div class="card">
    <div class="phrase">{{Phrase}}</div>
    <div class="meta">
        <span class="type">{{Type}}</span>
        <span class="structure">{{Structure}}</span>
    </div>
</div>"#;

const BACK: &str = r#"{{FrontSide}}
<hr id="answer">
<div class="definition">
    <div class="label">Definition:</div>
    <div class="content">{{Definition}}</div>
</div>
{{#Lemma}}
<div class="lemma">
    <div class="label">Lemma:</div>
    <div class="content">{{Lemma}}</div>
</div>
{{/Lemma}}"#;

const CSS: &str = r#".card {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    text-align: center;
    padding: 20px;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    border-radius: 10px;
    margin: 10px;
}

.phrase {
    font-size: 32px;
    font-weight: 700;
    color: #ffffff;
    margin-bottom: 15px;
    text-shadow: 2px 2px 4px rgba(0,0,0,0.2);
}

.meta {
    display: flex;
    justify-content: center;
    gap: 15px;
    margin-top: 10px;
}

.type {
    background: rgba(255,255,255,0.2);
    color: #ffffff;
    padding: 5px 12px;
    border-radius: 20px;
    font-size: 14px;
    font-weight: 600;
    text-transform: uppercase;
}

.structure {
    background: rgba(255,255,255,0.15);
    color: #ffffff;
    padding: 5px 12px;
    border-radius: 20px;
    font-size: 12px;
    font-weight: 500;
}

hr#answer {
    border: none;
    height: 2px;
    background: linear-gradient(to right, transparent, #667eea, transparent);
    margin: 25px 0;
}

.definition, .lemma {
    background: #f8f9fa;
    padding: 20px;
    border-radius: 8px;
    margin: 15px 0;
    text-align: left;
    box-shadow: 0 2px 8px rgba(0,0,0,0.1);
}

.label {
    font-size: 14px;
    font-weight: 700;
    color: #667eea;
    text-transform: uppercase;
    margin-bottom: 8px;
    letter-spacing: 0.5px;
}

.content {
    font-size: 18px;
    color: #2c3e50;
    line-height: 1.6;
}

.lemma .content {
    font-style: italic;
    color: #7f8c8d;
    font-size: 16px;
}
"#;

/// Builds the card template with a fresh id from `ids`.
pub fn create_card_model<I: IdSource + ?Sized>(ids: &mut I) -> CardTemplate {
    let id = ids.next_id();
    log::debug!("card model id {}", id);

    CardTemplate {
        id,
        name: MODEL_NAME.to_string(),
        fields: FIELD_NAMES.iter().map(|f| f.to_string()).collect(),
        card_name: CARD_NAME.to_string(),
        front: FRONT.to_string(),
        back: BACK.to_string(),
        css: CSS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{RandomIds, SequenceIds, ID_MAX, ID_MIN};

    #[test]
    fn test_fields_in_order() {
        let model = create_card_model(&mut SequenceIds::default());
        assert_eq!(
            model.fields,
            vec!["Phrase", "Type", "Structure", "Definition", "Lemma"]
        );
    }

    #[test]
    fn test_id_comes_from_source() {
        let mut ids = SequenceIds::starting_at(ID_MIN + 42);
        let model = create_card_model(&mut ids);
        assert_eq!(model.id, ID_MIN + 42);
        assert_eq!(model.name, MODEL_NAME);
        assert_eq!(model.card_name, CARD_NAME);
    }

    #[test]
    fn test_random_models_get_distinct_ids() {
        let mut ids = RandomIds;
        let a = create_card_model(&mut ids);
        let b = create_card_model(&mut ids);
        assert!((ID_MIN..ID_MAX).contains(&a.id));
        assert!((ID_MIN..ID_MAX).contains(&b.id));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_front_shows_phrase_type_structure() {
        let model = create_card_model(&mut SequenceIds::default());
        for field in ["{{Phrase}}", "{{Type}}", "{{Structure}}"] {
            assert!(model.front.contains(field), "front missing {}", field);
        }
        assert!(!model.front.contains("{{Definition}}"));
    }

    #[test]
    fn test_back_wraps_lemma_in_section() {
        let model = create_card_model(&mut SequenceIds::default());
        assert!(model.back.starts_with("{{FrontSide}}"));
        assert!(model.back.contains("{{Definition}}"));

        let open = model.back.find("{{#Lemma}}").unwrap();
        let lemma = model.back.find("{{Lemma}}").unwrap();
        let close = model.back.find("{{/Lemma}}").unwrap();
        assert!(open < lemma && lemma < close);
    }
}
