//! Present-tense paradigms.
//!
//! Three verbs (`avoir`, `être`, `aller`) come from fixed tables in the
//! [`Lexicon`]: six forms, one per person, plus a fixed past participle.
//! Regular `-er` verbs are generated from the stem:
//!
//! ```text
//! manger   stem "mang"  ─┬─ 1sg/3sg  mange
//!                        ├─ 2sg      manges
//!                        ├─ 1pl      mangeons   (-ger keeps the e)
//!                        ├─ 2pl      mangez
//!                        ├─ 3pl      mangent
//!                        └─ pp       mangé
//! commencer  1pl commençons          (-cer: c -> ç)
//! payer      paie/paies/paient       (-yer: y -> i outside 1pl/2pl)
//! ```
//!
//! Anything else is unsupported and yields an empty paradigm.

use crate::{IrregularVerb, Lexicon, PartOfSpeech, Persons, Word};

/// Forms produced for one infinitive. Built on demand; not cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationParadigm {
    pub infinitive: Word,
    pub past_participle: Option<Word>,
    /// Conjugated forms, each tagged with the person(s) it serves.
    pub forms: Vec<Word>,
}

impl ConjugationParadigm {
    fn unsupported(infinitive: &Word) -> Self {
        ConjugationParadigm { infinitive: infinitive.clone(), past_participle: None, forms: Vec::new() }
    }

    /// False when the verb is outside what the conjugator handles. Callers
    /// should disable conjugation choices in that case.
    pub fn is_supported(&self) -> bool {
        !self.forms.is_empty()
    }

    /// The form serving `person` (a single person flag), if any.
    pub fn form_for(&self, person: Persons) -> Option<&Word> {
        self.forms.iter().find(|w| w.persons().contains(person))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VerbConjugator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> VerbConjugator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn conjugate(&self, infinitive: &Word) -> ConjugationParadigm {
        let lemma = infinitive.text.trim().to_lowercase();

        if let Some(verb) = self.lexicon.irregular_verb(&lemma) {
            tracing::debug!(%lemma, "fixed paradigm");
            return fixed_paradigm(infinitive, verb);
        }

        match lemma.strip_suffix("er") {
            Some(stem) if !stem.is_empty() => regular_paradigm(infinitive, stem),
            _ => {
                tracing::debug!(%lemma, "unsupported verb, empty paradigm");
                ConjugationParadigm::unsupported(infinitive)
            }
        }
    }
}

fn fixed_paradigm(infinitive: &Word, verb: &IrregularVerb) -> ConjugationParadigm {
    let forms = verb
        .forms
        .iter()
        .map(|f| Word::new(&f.text, PartOfSpeech::AuxiliaryVerb, &f.translation).with_tags(f.persons.labels()))
        .collect();
    let past_participle =
        Word::new(&verb.past_participle, PartOfSpeech::PastParticipleVerb, &verb.past_participle_translation);

    ConjugationParadigm { infinitive: infinitive.clone(), past_participle: Some(past_participle), forms }
}

fn regular_paradigm(infinitive: &Word, stem: &str) -> ConjugationParadigm {
    let gloss = infinitive.translation.strip_prefix("to ").unwrap_or(&infinitive.translation);

    // -yer: y -> i everywhere except nous/vous.
    let singular_stem = match stem.strip_suffix('y') {
        Some(base) => format!("{base}i"),
        None => stem.to_string(),
    };

    let nous = if stem.ends_with('g') {
        format!("{stem}eons")
    } else if let Some(base) = stem.strip_suffix('c') {
        format!("{base}çons")
    } else {
        format!("{stem}ons")
    };

    let forms = [
        (format!("{singular_stem}e"), Persons::FIRST_SINGULAR | Persons::THIRD_SINGULAR),
        (format!("{singular_stem}es"), Persons::SECOND_SINGULAR),
        (nous, Persons::FIRST_PLURAL),
        (format!("{stem}ez"), Persons::SECOND_PLURAL),
        (format!("{singular_stem}ent"), Persons::THIRD_PLURAL),
    ]
    .into_iter()
    .map(|(text, persons)| Word::new(text, PartOfSpeech::Verb, gloss).with_tags(persons.labels()))
    .collect();

    let past_participle = Word::new(format!("{stem}é"), PartOfSpeech::PastParticipleVerb, gloss);

    tracing::debug!(lemma = %infinitive.text, %stem, "generated -er paradigm");

    ConjugationParadigm { infinitive: infinitive.clone(), past_participle: Some(past_participle), forms }
}
