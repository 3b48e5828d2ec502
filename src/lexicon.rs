//! Lexical data.
//!
//! A [`Lexicon`] owns every table the engine consults: the base vocabulary
//! (per part of speech), the exception tables used by inflection and
//! conjugation, and the slot-level contraction rules. It is built once and
//! then only read; components borrow it.
//!
//! ```text
//! words.rs       ──┐
//!                  ├─ Lexicon::french() ──▶ &Lexicon ──▶ WordFormGenerator
//! exceptions.rs  ──┘                                 ├─▶ VerbConjugator
//!                                                    └─▶ ElisionEngine
//! ```
//!
//! Tests and embedders can start from [`Lexicon::empty`] and add only the
//! entries they care about. [`Lexicon::validate`] catches tables that would
//! make the engine produce malformed output.
//!
//! Keys (lemmas, infinitives, triggers) are stored lowercased; lookups fold
//! case the same way.

#[path = "lexicon/exceptions.rs"]
mod exceptions;
#[path = "lexicon/words.rs"]
mod words;

use crate::{PartOfSpeech, Persons, Word};
use std::collections::HashMap;

/// Explicit forms for an adjective the regular rules cannot produce. The
/// masculine singular is always the lemma itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjectiveForms {
    pub feminine_singular: String,
    pub masculine_plural: String,
    pub feminine_plural: String,
}

impl AdjectiveForms {
    pub fn new(
        feminine_singular: impl Into<String>,
        masculine_plural: impl Into<String>,
        feminine_plural: impl Into<String>,
    ) -> Self {
        AdjectiveForms {
            feminine_singular: feminine_singular.into(),
            masculine_plural: masculine_plural.into(),
            feminine_plural: feminine_plural.into(),
        }
    }
}

/// One present-tense form of a fixed paradigm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularForm {
    pub text: String,
    pub translation: String,
    pub persons: Persons,
}

/// A hard-coded paradigm: one form per grammatical person plus the participle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularVerb {
    pub forms: Vec<IrregularForm>,
    pub past_participle: String,
    pub past_participle_translation: String,
}

impl IrregularVerb {
    pub fn new(past_participle: impl Into<String>, past_participle_translation: impl Into<String>) -> Self {
        IrregularVerb {
            forms: Vec::new(),
            past_participle: past_participle.into(),
            past_participle_translation: past_participle_translation.into(),
        }
    }

    pub fn with_form(mut self, text: impl Into<String>, translation: impl Into<String>, persons: Persons) -> Self {
        self.forms.push(IrregularForm { text: text.into(), translation: translation.into(), persons });
        self
    }
}

/// Slot-level contraction rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElisionRules {
    /// Lowercase words that lose their final vowel (`je`, `le`, `que`, ...).
    pub triggers: Vec<String>,
    /// Initial characters that make the following word eligible.
    pub vowel_initials: Vec<char>,
    /// Trigger -> the only beginnings of the following word that allow it.
    pub restrictions: HashMap<String, Vec<String>>,
}

impl ElisionRules {
    /// The built-in French rules.
    pub fn french() -> Self {
        ElisionRules {
            triggers: exceptions::ELISION_TRIGGERS.iter().map(|t| t.to_string()).collect(),
            vowel_initials: exceptions::VOWEL_INITIALS.to_vec(),
            restrictions: exceptions::ELISION_RESTRICTIONS
                .iter()
                .map(|(trigger, starts)| (trigger.to_string(), starts.iter().map(|s| s.to_string()).collect()))
                .collect(),
        }
    }

    pub fn is_trigger(&self, lower: &str) -> bool {
        self.triggers.iter().any(|t| t == lower)
    }

    pub fn starts_with_vowel(&self, lower: &str) -> bool {
        lower.chars().next().is_some_and(|c| self.vowel_initials.contains(&c))
    }

    /// Whether `trigger` may elide before `next` (both lowercase), once the
    /// general trigger/vowel conditions already hold.
    pub fn allows(&self, trigger: &str, next: &str) -> bool {
        match self.restrictions.get(trigger) {
            Some(starts) => starts.iter().any(|s| next.starts_with(s.as_str())),
            None => true,
        }
    }
}

/// Problems detected by [`Lexicon::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    #[error("irregular verb '{infinitive}' has {found} forms, expected 6")]
    ParadigmSize { infinitive: String, found: usize },

    #[error("irregular verb '{infinitive}' does not cover every person (missing {missing:?})")]
    ParadigmCoverage { infinitive: String, missing: Persons },

    #[error("empty {table} entry for '{key}'")]
    EmptyEntry { table: &'static str, key: String },

    #[error("elision trigger '{0}' must be lowercase")]
    TriggerCase(String),

    #[error("elision trigger '{0}' does not end in a vowel")]
    TriggerEnding(String),

    #[error("elision restriction on '{0}', which is not a trigger")]
    OrphanRestriction(String),
}

/// Immutable lexical tables shared by every engine component.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<Word>,
    irregular_nouns: HashMap<String, String>,
    irregular_adjectives: HashMap<String, AdjectiveForms>,
    irregular_verbs: HashMap<String, IrregularVerb>,
    elision: ElisionRules,
}

impl Lexicon {
    /// No words, no exceptions, no contraction rules.
    pub fn empty() -> Self {
        Lexicon::default()
    }

    /// The built-in French vocabulary and exception tables.
    pub fn french() -> Self {
        let mut lexicon = Lexicon::empty().with_elision_rules(ElisionRules::french());

        for (pos, entries) in words::BASE_WORDS {
            for (text, translation, tags) in entries.iter() {
                lexicon = lexicon.with_word(Word::new(*text, *pos, *translation).with_tags(tags.iter().copied()));
            }
        }

        for (lemma, feminine) in exceptions::IRREGULAR_NOUNS {
            lexicon = lexicon.with_irregular_noun(*lemma, *feminine);
        }

        for (lemma, fs, mp, fp) in exceptions::IRREGULAR_ADJECTIVES {
            lexicon = lexicon.with_irregular_adjective(*lemma, AdjectiveForms::new(*fs, *mp, *fp));
        }

        for (infinitive, participle, gloss, forms) in exceptions::IRREGULAR_VERBS {
            let verb = forms
                .iter()
                .fold(IrregularVerb::new(*participle, *gloss), |verb, (text, tr, persons)| {
                    verb.with_form(*text, *tr, *persons)
                });
            lexicon = lexicon.with_irregular_verb(*infinitive, verb);
        }

        tracing::debug!(
            words = lexicon.words.len(),
            irregular_nouns = lexicon.irregular_nouns.len(),
            irregular_adjectives = lexicon.irregular_adjectives.len(),
            irregular_verbs = lexicon.irregular_verbs.len(),
            "built french lexicon"
        );

        lexicon
    }

    pub fn with_word(mut self, word: Word) -> Self {
        self.words.push(word);
        self
    }

    pub fn with_irregular_noun(mut self, lemma: impl AsRef<str>, feminine: impl Into<String>) -> Self {
        self.irregular_nouns.insert(lemma.as_ref().to_lowercase(), feminine.into());
        self
    }

    pub fn with_irregular_adjective(mut self, lemma: impl AsRef<str>, forms: AdjectiveForms) -> Self {
        self.irregular_adjectives.insert(lemma.as_ref().to_lowercase(), forms);
        self
    }

    pub fn with_irregular_verb(mut self, infinitive: impl AsRef<str>, verb: IrregularVerb) -> Self {
        self.irregular_verbs.insert(infinitive.as_ref().to_lowercase(), verb);
        self
    }

    pub fn with_elision_rules(mut self, rules: ElisionRules) -> Self {
        self.elision = rules;
        self
    }

    /// Base words of one category, in table order.
    pub fn words(&self, pos: PartOfSpeech) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.part_of_speech == pos)
    }

    /// First base word whose text matches (case-insensitively).
    pub fn lookup(&self, text: &str) -> Option<&Word> {
        let lower = text.to_lowercase();
        self.words.iter().find(|w| w.text.to_lowercase() == lower)
    }

    /// Like [`Lexicon::lookup`] but restricted to one category.
    pub fn lookup_as(&self, text: &str, pos: PartOfSpeech) -> Option<&Word> {
        let lower = text.to_lowercase();
        self.words(pos).find(|w| w.text.to_lowercase() == lower)
    }

    pub fn irregular_feminine(&self, lemma: &str) -> Option<&str> {
        self.irregular_nouns.get(&lemma.to_lowercase()).map(String::as_str)
    }

    pub fn irregular_adjective(&self, lemma: &str) -> Option<&AdjectiveForms> {
        self.irregular_adjectives.get(&lemma.to_lowercase())
    }

    pub fn irregular_verb(&self, infinitive: &str) -> Option<&IrregularVerb> {
        self.irregular_verbs.get(&infinitive.to_lowercase())
    }

    pub fn elision(&self) -> &ElisionRules {
        &self.elision
    }

    /// Check the tables for entries that would yield malformed output.
    pub fn validate(&self) -> Result<(), LexiconError> {
        for (lemma, feminine) in &self.irregular_nouns {
            if lemma.is_empty() || feminine.is_empty() {
                return Err(LexiconError::EmptyEntry { table: "irregular noun", key: lemma.clone() });
            }
        }

        for (lemma, forms) in &self.irregular_adjectives {
            let blank = [&forms.feminine_singular, &forms.masculine_plural, &forms.feminine_plural]
                .iter()
                .any(|f| f.is_empty());
            if lemma.is_empty() || blank {
                return Err(LexiconError::EmptyEntry { table: "irregular adjective", key: lemma.clone() });
            }
        }

        for (infinitive, verb) in &self.irregular_verbs {
            if verb.forms.len() != 6 {
                return Err(LexiconError::ParadigmSize { infinitive: infinitive.clone(), found: verb.forms.len() });
            }
            let covered = verb.forms.iter().fold(Persons::empty(), |acc, f| acc | f.persons);
            if covered != Persons::all() {
                return Err(LexiconError::ParadigmCoverage {
                    infinitive: infinitive.clone(),
                    missing: Persons::all().difference(covered),
                });
            }
            if verb.past_participle.is_empty() || verb.forms.iter().any(|f| f.text.is_empty()) {
                return Err(LexiconError::EmptyEntry { table: "irregular verb", key: infinitive.clone() });
            }
        }

        for trigger in &self.elision.triggers {
            if *trigger != trigger.to_lowercase() {
                return Err(LexiconError::TriggerCase(trigger.clone()));
            }
            if !trigger.chars().last().is_some_and(|c| "aeiouyéèê".contains(c)) {
                return Err(LexiconError::TriggerEnding(trigger.clone()));
            }
        }

        if let Some(orphan) = self.elision.restrictions.keys().find(|k| !self.elision.is_trigger(k)) {
            return Err(LexiconError::OrphanRestriction(orphan.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_lexicon_is_valid() {
        assert_eq!(Lexicon::french().validate(), Ok(()));
    }

    #[test]
    fn mutable_nouns_have_irregular_feminines() {
        let lexicon = Lexicon::french();
        for noun in lexicon.words(PartOfSpeech::Noun).filter(|w| w.has_tag(crate::MUTABLE_TAG)) {
            assert!(lexicon.irregular_feminine(&noun.text).is_some(), "{} is tagged mutable", noun.text);
        }
    }

    #[test]
    fn lookups_fold_case() {
        let lexicon = Lexicon::french();

        assert_eq!(lexicon.irregular_verb("ÊTRE").map(|v| v.past_participle.as_str()), Some("été"));
        assert_eq!(lexicon.irregular_feminine("Chat"), Some("chatte"));
        assert_eq!(lexicon.lookup("Avion").map(|w| w.translation.as_str()), Some("plane"));
        assert_eq!(
            lexicon.lookup_as("le", PartOfSpeech::Object).map(|w| w.translation.as_str()),
            Some("him")
        );
    }

    #[test]
    fn every_part_of_speech_with_a_table_has_words() {
        let lexicon = Lexicon::french();
        for pos in [PartOfSpeech::Subject, PartOfSpeech::Noun, PartOfSpeech::Adjective, PartOfSpeech::Negation] {
            assert!(lexicon.words(pos).next().is_some(), "no {pos} words");
        }
        assert_eq!(lexicon.words(PartOfSpeech::PastParticipleVerb).count(), 0);
    }

    #[test]
    fn short_paradigm_is_rejected() {
        let verb = IrregularVerb::new("fait", "done").with_form("fais", "do", Persons::FIRST_SINGULAR);
        let lexicon = Lexicon::empty().with_irregular_verb("faire", verb);

        assert_eq!(lexicon.validate(), Err(LexiconError::ParadigmSize { infinitive: "faire".into(), found: 1 }));
    }

    #[test]
    fn paradigm_must_cover_every_person() {
        let verb = (0..6).fold(IrregularVerb::new("fait", "done"), |v, _| {
            v.with_form("fais", "do", Persons::FIRST_SINGULAR)
        });
        let lexicon = Lexicon::empty().with_irregular_verb("faire", verb);

        assert!(matches!(lexicon.validate(), Err(LexiconError::ParadigmCoverage { .. })));
    }

    #[test]
    fn consonant_final_trigger_is_rejected() {
        let rules = ElisionRules { triggers: vec!["les".into()], ..ElisionRules::french() };
        let err = Lexicon::empty().with_elision_rules(rules).validate().unwrap_err();

        // "si"/"ce" restrictions are checked after triggers.
        assert_eq!(err, LexiconError::TriggerEnding("les".into()));
    }

    #[test]
    fn capitalized_trigger_is_rejected() {
        let rules = ElisionRules { triggers: vec!["Je".into()], ..ElisionRules::french() };
        let err = Lexicon::empty().with_elision_rules(rules).validate().unwrap_err();

        assert_eq!(err, LexiconError::TriggerCase("Je".into()));
    }

    #[test]
    fn blank_entries_are_rejected_in_every_table() {
        let noun = Lexicon::empty().with_irregular_noun("chat", "");
        assert_eq!(
            noun.validate(),
            Err(LexiconError::EmptyEntry { table: "irregular noun", key: "chat".into() })
        );

        let adjective = Lexicon::empty().with_irregular_adjective("beau", AdjectiveForms::new("belle", "", "belles"));
        assert_eq!(
            adjective.validate(),
            Err(LexiconError::EmptyEntry { table: "irregular adjective", key: "beau".into() })
        );

        let full = |participle: &str, third_plural: &str| {
            IrregularVerb::new(participle, "done")
                .with_form("fais", "do", Persons::FIRST_SINGULAR)
                .with_form("fais", "do", Persons::SECOND_SINGULAR)
                .with_form("fait", "does", Persons::THIRD_SINGULAR)
                .with_form("faisons", "do", Persons::FIRST_PLURAL)
                .with_form("faites", "do", Persons::SECOND_PLURAL)
                .with_form(third_plural, "do", Persons::THIRD_PLURAL)
        };
        let blank_form = Lexicon::empty().with_irregular_verb("faire", full("fait", ""));
        let blank_participle = Lexicon::empty().with_irregular_verb("faire", full("", "font"));
        let expected = Err(LexiconError::EmptyEntry { table: "irregular verb", key: "faire".into() });

        assert_eq!(blank_form.validate(), expected);
        assert_eq!(blank_participle.validate(), expected);
        assert_eq!(Lexicon::empty().with_irregular_verb("faire", full("fait", "font")).validate(), Ok(()));
    }

    #[test]
    fn restriction_without_trigger_is_rejected() {
        let mut rules = ElisionRules::french();
        rules.triggers.retain(|t| t != "ce");

        let err = Lexicon::empty().with_elision_rules(rules).validate().unwrap_err();
        assert_eq!(err, LexiconError::OrphanRestriction("ce".into()));
    }

    #[test]
    fn restrictions_narrow_the_general_rule() {
        let rules = ElisionRules::french();

        assert!(rules.allows("si", "ils"));
        assert!(!rules.allows("si", "elle"));
        assert!(rules.allows("ce", "était"));
        assert!(!rules.allows("ce", "avion"));
        assert!(rules.allows("le", "avion"));
    }
}
