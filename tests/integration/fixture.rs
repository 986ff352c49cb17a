//! A shared noun paradigm.

use paradigm_engine::Rule;
use paradigm_foundation::{AxisId, PosId, SlotId, ValueId, WordId};
use paradigm_runtime::Session;
use paradigm_storage::Word;

pub const NOUN: PosId = PosId::new(1);
pub const KATO: WordId = WordId::new(1);
pub const HUNDO: WordId = WordId::new(2);

pub struct Language {
    pub session: Session,
    pub number: AxisId,
    pub singular: ValueId,
    pub plural: ValueId,
    pub case: AxisId,
    pub nominative: ValueId,
    pub accusative: ValueId,
    pub vocative: AxisId,
}

impl Language {
    pub fn slot(&self, number: ValueId, case: ValueId) -> SlotId {
        SlotId::dimensional(&[number, case])
    }
}

/// Number x Case plus a vocative singleton, two nouns, and plural/accusative endings.
pub fn language() -> Language {
    let mut session = Session::new();
    let number = session.add_axis(NOUN, "Number");
    let singular = session.add_value(number, "singular").unwrap();
    let plural = session.add_value(number, "plural").unwrap();
    let case = session.add_axis(NOUN, "Case");
    let nominative = session.add_value(case, "nominative").unwrap();
    let accusative = session.add_value(case, "accusative").unwrap();
    let vocative = session.add_singleton_axis(NOUN, "Vocative");

    session.add_word(Word::new(KATO, "kato", NOUN));
    session.add_word(Word::new(HUNDO, "hundo", NOUN));

    let plural_rule = |slot: SlotId| {
        Rule::new(NOUN, slot)
            .with_name("plural")
            .with_transform("o$", "oj")
    };
    let accusative_rule = |slot: SlotId| {
        Rule::new(NOUN, slot)
            .with_name("accusative")
            .with_transform("$", "n")
    };
    let pl_nom = SlotId::dimensional(&[plural, nominative]);
    let pl_acc = SlotId::dimensional(&[plural, accusative]);
    let sg_acc = SlotId::dimensional(&[singular, accusative]);
    session.add_rule(plural_rule(pl_nom)).unwrap();
    session.add_rule(plural_rule(pl_acc.clone())).unwrap();
    session.add_rule(accusative_rule(pl_acc)).unwrap();
    session.add_rule(accusative_rule(sg_acc)).unwrap();

    Language {
        session,
        number,
        singular,
        plural,
        case,
        nominative,
        accusative,
        vocative,
    }
}
