//! Slot-level contraction.
//!
//! The engine looks at adjacent slot pairs, strictly left to right, and
//! reports the *first* pair that must contract:
//!
//! ```text
//! [Je][ai][un][chat]
//!  └┬─┘
//!   find_next_elision -> position 0, merged [j'ai] (id of "Je")
//! [j'ai][un][chat]
//!   find_next_elision -> None   (fixed point)
//! ```
//!
//! A merge shrinks the sequence, so indices after it shift; that is why only
//! one candidate is returned per scan. [`ElisionEngine::reduce_to_fixed_point`]
//! repeats scan + splice until nothing is left, and
//! [`ElisionEngine::reduce_with_trace`] also records every intermediate
//! sequence so a caller can animate the steps at its own pace.
//!
//! Contraction fires when the left word (lowercased) is a trigger, the right
//! word starts with a vowel-class character, and the trigger's restriction
//! (if any) accepts the right word: `si` only before `il...`, `ce` only
//! before `est...`/`ét...`.

use super::metrics::{MergeStep, Reduction};
use crate::{ElisionRules, Lexicon, Origin, SentenceSlot, Word};
use std::time::Instant;

/// A pair at `position`/`position + 1` to be replaced by `merged_slot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElisionCandidate {
    pub position: usize,
    pub merged_slot: SentenceSlot,
}

impl ElisionCandidate {
    /// Replace the two-slot span with the merged slot.
    pub fn apply(self, slots: &mut Vec<SentenceSlot>) {
        slots.splice(self.position..self.position + 2, [self.merged_slot]);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ElisionEngine<'a> {
    rules: &'a ElisionRules,
}

impl<'a> ElisionEngine<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_rules(lexicon.elision())
    }

    pub fn with_rules(rules: &'a ElisionRules) -> Self {
        Self { rules }
    }

    /// Whether `a` followed by `b` must contract. Empty slots never do.
    pub fn should_elide(&self, a: &SentenceSlot, b: &SentenceSlot) -> bool {
        let (Some(first), Some(second)) = (&a.value, &b.value) else {
            return false;
        };

        let w1 = first.text.to_lowercase();
        let w2 = second.text.to_lowercase();

        let elide = self.rules.is_trigger(&w1) && self.rules.starts_with_vowel(&w2) && self.rules.allows(&w1, &w2);
        tracing::trace!(%w1, %w2, elide, "checked pair");
        elide
    }

    /// First contracting pair, scanning left to right.
    pub fn find_next_elision(&self, slots: &[SentenceSlot]) -> Option<ElisionCandidate> {
        let position = slots.windows(2).position(|pair| self.should_elide(&pair[0], &pair[1]))?;
        let merged_slot = merge(&slots[position], &slots[position + 1])?;

        tracing::debug!(position, merged = ?merged_slot.text(), "elision candidate");

        Some(ElisionCandidate { position, merged_slot })
    }

    /// Apply merges until no candidate remains.
    pub fn reduce_to_fixed_point(&self, mut slots: Vec<SentenceSlot>) -> Vec<SentenceSlot> {
        while let Some(candidate) = self.find_next_elision(&slots) {
            candidate.apply(&mut slots);
        }
        slots
    }

    /// Like [`ElisionEngine::reduce_to_fixed_point`], recording each step.
    pub fn reduce_with_trace(&self, mut slots: Vec<SentenceSlot>) -> Reduction {
        let started = Instant::now();
        let mut steps = Vec::new();

        loop {
            let step_started = Instant::now();
            let Some(candidate) = self.find_next_elision(&slots) else {
                break;
            };

            let position = candidate.position;
            let merged_text = candidate.merged_slot.text().unwrap_or_default().to_string();
            candidate.apply(&mut slots);

            steps.push(MergeStep { position, merged_text, slots: slots.clone(), duration: step_started.elapsed() });
        }

        Reduction { slots, steps, total: started.elapsed() }
    }
}

/// Build the replacement for a contracting pair. The merged slot keeps the
/// left slot's id and takes everything else from the right slot.
fn merge(a: &SentenceSlot, b: &SentenceSlot) -> Option<SentenceSlot> {
    let first = a.value.as_ref()?;
    let second = b.value.as_ref()?;

    let mut prefix = first.text.to_lowercase();
    prefix.pop();

    let word = Word {
        text: format!("{prefix}'{}", second.text),
        part_of_speech: second.part_of_speech,
        translation: format!("{} + {}", first.translation, second.translation),
        tags: first.tags.union(&second.tags).cloned().collect(),
        origin: Origin::Elided,
    };

    Some(SentenceSlot {
        id: a.id,
        part_of_speech: b.part_of_speech,
        value: Some(word),
        placeholder: b.placeholder.clone(),
        fixed: a.fixed || b.fixed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PartOfSpeech, SlotId};

    fn slots(words: &[(&str, PartOfSpeech)]) -> Vec<SentenceSlot> {
        words
            .iter()
            .enumerate()
            .map(|(i, (text, pos))| SentenceSlot::filled(i as u32, Word::new(*text, *pos, *text)))
            .collect()
    }

    fn merged_text(lexicon: &Lexicon, words: &[(&str, PartOfSpeech)]) -> Option<String> {
        ElisionEngine::new(lexicon)
            .find_next_elision(&slots(words))
            .and_then(|c| c.merged_slot.value)
            .map(|w| w.text)
    }

    #[test]
    fn basic_contractions() {
        use PartOfSpeech::*;
        let lexicon = Lexicon::french();

        assert_eq!(merged_text(&lexicon, &[("je", Subject), ("ai", AuxiliaryVerb)]).as_deref(), Some("j'ai"));
        assert_eq!(merged_text(&lexicon, &[("le", Article), ("avion", Noun)]).as_deref(), Some("l'avion"));
        assert_eq!(merged_text(&lexicon, &[("si", Connector), ("il", Subject)]).as_deref(), Some("s'il"));
        assert_eq!(merged_text(&lexicon, &[("ce", Subject), ("est", AuxiliaryVerb)]).as_deref(), Some("c'est"));
        assert_eq!(merged_text(&lexicon, &[("la", Article), ("homme", Noun)]).as_deref(), Some("l'homme"));
        assert_eq!(merged_text(&lexicon, &[("de", Preposition), ("école", Noun)]).as_deref(), Some("d'école"));
        assert_eq!(merged_text(&lexicon, &[("jusque", Preposition), ("ici", Adverb)]).as_deref(), Some("jusqu'ici"));
    }

    #[test]
    fn no_contraction_before_consonants_or_outside_triggers() {
        use PartOfSpeech::*;
        let lexicon = Lexicon::french();

        assert_eq!(merged_text(&lexicon, &[("la", Article), ("pomme", Noun)]), None);
        assert_eq!(merged_text(&lexicon, &[("un", Article), ("avion", Noun)]), None);
        assert_eq!(merged_text(&lexicon, &[("les", Article), ("avions", Noun)]), None);
        assert_eq!(merged_text(&lexicon, &[("tu", Subject), ("as", AuxiliaryVerb)]), None);
    }

    #[test]
    fn si_and_ce_are_restricted() {
        use PartOfSpeech::*;
        let lexicon = Lexicon::french();

        assert_eq!(merged_text(&lexicon, &[("si", Connector), ("elle", Subject)]), None);
        assert_eq!(merged_text(&lexicon, &[("si", Connector), ("ils", Subject)]).as_deref(), Some("s'ils"));
        assert_eq!(merged_text(&lexicon, &[("ce", Subject), ("avion", Noun)]), None);
        assert_eq!(merged_text(&lexicon, &[("ce", Subject), ("était", Verb)]).as_deref(), Some("c'était"));
        assert_eq!(merged_text(&lexicon, &[("ce", Subject), ("été", Verb)]).as_deref(), Some("c'été"));
    }

    #[test]
    fn merged_slot_shape() {
        let lexicon = Lexicon::french();
        let a = SentenceSlot::new(7, PartOfSpeech::Subject, "who?")
            .with_value(Word::new("Je", PartOfSpeech::Subject, "I").with_tag("1sg"))
            .fixed();
        let b = SentenceSlot::new(9, PartOfSpeech::AuxiliaryVerb, "verb")
            .with_value(Word::new("Ai", PartOfSpeech::AuxiliaryVerb, "have").with_tags(["1sg", "present"]));

        let candidate = ElisionEngine::new(&lexicon).find_next_elision(&[a, b]).unwrap();
        let slot = candidate.merged_slot;
        let word = slot.value.unwrap();

        assert_eq!(candidate.position, 0);
        assert_eq!(slot.id, SlotId(7));
        assert_eq!(slot.part_of_speech, PartOfSpeech::AuxiliaryVerb);
        assert_eq!(slot.placeholder, "verb");
        assert!(slot.fixed);

        assert_eq!(word.text, "j'Ai");
        assert_eq!(word.part_of_speech, PartOfSpeech::AuxiliaryVerb);
        assert_eq!(word.translation, "I + have");
        assert_eq!(word.tags.iter().map(String::as_str).collect::<Vec<_>>(), ["1sg", "present"]);
        assert!(word.is_elided());
    }

    #[test]
    fn empty_slots_never_contract() {
        let lexicon = Lexicon::french();
        let sequence = vec![
            SentenceSlot::filled(0, Word::new("je", PartOfSpeech::Subject, "I")),
            SentenceSlot::new(1, PartOfSpeech::Verb, "verb"),
        ];

        assert_eq!(ElisionEngine::new(&lexicon).find_next_elision(&sequence), None);
    }

    #[test]
    fn returns_only_the_leftmost_candidate() {
        use PartOfSpeech::*;
        let lexicon = Lexicon::french();
        let sequence = slots(&[("que", Connector), ("il", Subject), ("le", Object), ("aime", Verb)]);

        let candidate = ElisionEngine::new(&lexicon).find_next_elision(&sequence).unwrap();
        assert_eq!(candidate.position, 0);
        assert_eq!(candidate.merged_slot.text(), Some("qu'il"));
    }

    #[test]
    fn apply_splices_two_slots_into_one() {
        use PartOfSpeech::*;
        let lexicon = Lexicon::french();
        let mut sequence = slots(&[("il", Subject), ("ne", Negation), ("aime", Verb), ("pas", Negation)]);

        let candidate = ElisionEngine::new(&lexicon).find_next_elision(&sequence).unwrap();
        candidate.apply(&mut sequence);

        let texts: Vec<_> = sequence.iter().filter_map(SentenceSlot::text).collect();
        assert_eq!(texts, ["il", "n'aime", "pas"]);
        assert_eq!(sequence[1].id, SlotId(1));
    }

    #[test]
    fn reduction_reaches_a_fixed_point() {
        use PartOfSpeech::*;
        let lexicon = Lexicon::french();
        let engine = ElisionEngine::new(&lexicon);
        let sequence = slots(&[
            ("je", Subject),
            ("ne", Negation),
            ("ai", AuxiliaryVerb),
            ("pas", Negation),
            ("de", Preposition),
            ("eau", Noun),
        ]);

        let reduced = engine.reduce_to_fixed_point(sequence);
        let texts: Vec<_> = reduced.iter().filter_map(SentenceSlot::text).collect();

        assert_eq!(texts, ["je", "n'ai", "pas", "d'eau"]);
        assert_eq!(engine.find_next_elision(&reduced), None);
    }

    #[test]
    fn trace_records_each_intermediate_sequence() {
        use PartOfSpeech::*;
        let lexicon = Lexicon::french();
        let sequence = slots(&[("que", Connector), ("il", Subject), ("le", Object), ("aime", Verb)]);

        let reduction = ElisionEngine::new(&lexicon).reduce_with_trace(sequence);

        assert_eq!(reduction.steps.len(), 2);
        assert_eq!(reduction.steps[0].merged_text, "qu'il");
        assert_eq!(reduction.steps[0].slots.len(), 3);
        assert_eq!(reduction.steps[1].position, 1);
        assert_eq!(reduction.steps[1].merged_text, "l'aime");
        assert_eq!(reduction.slots, reduction.steps[1].slots);
        assert!(reduction.steps.iter().map(|s| s.duration).sum::<std::time::Duration>() <= reduction.total);
    }

    #[test]
    fn substitute_rules_drive_the_scan() {
        let rules = ElisionRules { triggers: vec!["lo".into()], vowel_initials: vec!['u'], ..ElisionRules::default() };
        let sequence = vec![
            SentenceSlot::filled(0, Word::new("lo", PartOfSpeech::Article, "the")),
            SentenceSlot::filled(1, Word::new("uomo", PartOfSpeech::Noun, "man")),
        ];

        let candidate = ElisionEngine::with_rules(&rules).find_next_elision(&sequence).unwrap();
        assert_eq!(candidate.merged_slot.text(), Some("l'uomo"));
    }
}
