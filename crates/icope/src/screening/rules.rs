//! The six screening rules and the engine that runs them.
//!
//! Each rule is a total predicate over the answer record: missing answers,
//! blank strings and out-of-domain values all fall through to the
//! non-triggering branch. Rules are evaluated unconditionally, in fixed
//! order, and each appends at most one referral.

use crate::record::{AnswerRecord, fields};

use super::referral::{Domain, Referral, ScreeningReport};

/// Sit-to-stand times above this many seconds trigger the mobility rule.
const SIT_TO_STAND_LIMIT_SECONDS: f64 = 12.0;

/// Rule table, in evaluation (and output) order.
const RULES: [(Domain, fn(&AnswerRecord) -> bool); 6] = [
    (Domain::Cognition, cognition_triggers),
    (Domain::Mobility, mobility_triggers),
    (Domain::Nutrition, nutrition_triggers),
    (Domain::Vision, vision_triggers),
    (Domain::Hearing, hearing_triggers),
    (Domain::Mood, mood_triggers),
];

/// Evaluate all six rules against a record.
///
/// The result is deterministic: the same record always yields the same
/// report, and referral order always matches rule order.
pub fn evaluate(record: &AnswerRecord) -> ScreeningReport {
    let referrals = RULES
        .iter()
        .filter(|(_, triggers)| triggers(record))
        .map(|&(domain, _)| Referral::for_domain(domain))
        .collect();
    ScreeningReport { referrals }
}

/// Any recalled item differs from what was shown, or the orientation
/// questions (date, location) were left blank.
///
/// An item left blank does not count as a mismatch on its own; only a wrong
/// answer does. Orientation blanks always trigger.
fn cognition_triggers(record: &AnswerRecord) -> bool {
    let item_wrong = fields::MEMORY_ITEMS.iter().any(|&(field, expected)| {
        record
            .get(field)
            .is_some_and(|v| !v.is_empty() && v.trim() != expected)
    });

    item_wrong
        || !record.is_answered(fields::TODAY_DATE)
        || !record.is_answered(fields::CURRENT_LOCATION)
}

/// Needs an assistive device, or the five-repetition chair-stand test took
/// strictly longer than 12 seconds. Unparseable times never trigger.
fn mobility_triggers(record: &AnswerRecord) -> bool {
    record.answer_is(fields::NEEDS_ASSISTIVE_DEVICE, fields::YES)
        || record
            .numeric(fields::SIT_TO_STAND_SECONDS)
            .is_some_and(|secs| secs > SIT_TO_STAND_LIMIT_SECONDS)
}

/// Unintentional weight loss over 3 kg, or reduced appetite.
fn nutrition_triggers(record: &AnswerRecord) -> bool {
    record.answer_is(fields::WEIGHT_LOSS, fields::YES)
        || record.answer_is(fields::REDUCED_APPETITE, fields::YES)
}

/// Reported difficulty seeing, or either vision check failed.
fn vision_triggers(record: &AnswerRecord) -> bool {
    record.answer_is(fields::VISION_DIFFICULTY, fields::YES)
        || record.answer_is(fields::WHO_VISION_TEST, fields::FAIL)
        || record.answer_is(fields::OPHTHALMOLOGY_SURVEY, fields::FAIL)
}

/// Failed the binaural whisper test.
fn hearing_triggers(record: &AnswerRecord) -> bool {
    record.answer_is(fields::WHISPER_TEST, fields::NO)
}

/// Either two-week depressive-symptom question answered yes.
fn mood_triggers(record: &AnswerRecord) -> bool {
    record.answer_is(fields::FEELS_DOWN, fields::YES)
        || record.answer_is(fields::LOST_INTEREST, fields::YES)
}
