//! Gender and number agreement for nouns and adjectives.
//!
//! Both categories run the same two-step pipeline, gender first, then
//! number:
//!
//! ```text
//! lemma ──▶ feminine? ──▶ plural? ──▶ retag(gender, number)
//!            │              │
//!            │              └─ nouns:  s/x/z keep, -au/-eu +x, -al -> -aux, else +s
//!            │                 adjs:   s/x keep,   -au +x,               else +s
//!            └─ nouns: irregular table, -er -> -ère, -f -> -ve, -x -> -se, else +e
//!               adjs:  +e unless already -e
//! ```
//!
//! Adjectives listed in the irregular table skip the pipeline entirely: the
//! table's form for the requested (gender, number) is used as-is. Table
//! forms pick up the lemma's leading capital (`Chat` -> `Chatte`).
//!
//! Every other part of speech passes through unchanged.

use crate::{Gender, Lexicon, Number, PartOfSpeech, Word};

/// Inflects nouns and adjectives against a [`Lexicon`]'s exception tables.
#[derive(Debug, Clone, Copy)]
pub struct WordFormGenerator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> WordFormGenerator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Return `word` in the requested gender and number.
    ///
    /// Only nouns and adjectives are inflected; any other word is returned
    /// unchanged (tags included).
    pub fn inflect(&self, word: &Word, gender: Gender, number: Number) -> Word {
        let text = match word.part_of_speech {
            PartOfSpeech::Noun => self.noun_form(word, gender, number),
            PartOfSpeech::Adjective => self.adjective_form(word, gender, number),
            _ => return word.clone(),
        };

        tracing::debug!(lemma = %word.text, %gender, %number, form = %text, "inflected");

        retag(word.with_text(text), gender, number)
    }

    /// The four agreement variants of `word`, in display order:
    /// masculine singular, feminine singular, masculine plural, feminine plural.
    ///
    /// Words that do not inflect yield a single-element list.
    pub fn variants(&self, word: &Word) -> Vec<Word> {
        if !matches!(word.part_of_speech, PartOfSpeech::Noun | PartOfSpeech::Adjective) {
            return vec![word.clone()];
        }

        [
            (Gender::Masculine, Number::Singular),
            (Gender::Feminine, Number::Singular),
            (Gender::Masculine, Number::Plural),
            (Gender::Feminine, Number::Plural),
        ]
        .into_iter()
        .map(|(gender, number)| self.inflect(word, gender, number))
        .collect()
    }

    fn noun_form(&self, word: &Word, gender: Gender, number: Number) -> String {
        let mut stem = word.text.clone();

        if gender == Gender::Feminine && word.gender() != Some(Gender::Feminine) {
            stem = match self.lexicon.irregular_feminine(&stem) {
                Some(feminine) => keep_capital(&stem, feminine),
                None => feminine_noun(&stem),
            };
        }

        if number == Number::Plural {
            stem = plural_noun(&stem);
        }

        stem
    }

    fn adjective_form(&self, word: &Word, gender: Gender, number: Number) -> String {
        if let Some(forms) = self.lexicon.irregular_adjective(&word.text) {
            return match (gender, number) {
                (Gender::Masculine, Number::Singular) => word.text.clone(),
                (Gender::Feminine, Number::Singular) => keep_capital(&word.text, &forms.feminine_singular),
                (Gender::Masculine, Number::Plural) => keep_capital(&word.text, &forms.masculine_plural),
                (Gender::Feminine, Number::Plural) => keep_capital(&word.text, &forms.feminine_plural),
            };
        }

        let mut stem = word.text.clone();
        if gender == Gender::Feminine {
            stem = append_e(&stem);
        }
        if number == Number::Plural {
            stem = plural_adjective(&stem);
        }
        stem
    }
}

fn feminine_noun(stem: &str) -> String {
    if let Some(base) = stem.strip_suffix("er") {
        format!("{base}ère")
    } else if let Some(base) = stem.strip_suffix('f') {
        format!("{base}ve")
    } else if let Some(base) = stem.strip_suffix('x') {
        format!("{base}se")
    } else {
        append_e(stem)
    }
}

fn append_e(stem: &str) -> String {
    if stem.ends_with('e') { stem.to_string() } else { format!("{stem}e") }
}

fn plural_noun(stem: &str) -> String {
    if stem.ends_with(['s', 'x', 'z']) {
        stem.to_string()
    } else if stem.ends_with("au") || stem.ends_with("eu") {
        format!("{stem}x")
    } else if let Some(base) = stem.strip_suffix("al") {
        format!("{base}aux")
    } else {
        format!("{stem}s")
    }
}

fn plural_adjective(stem: &str) -> String {
    if stem.ends_with(['s', 'x']) {
        stem.to_string()
    } else if stem.ends_with("au") {
        format!("{stem}x")
    } else {
        format!("{stem}s")
    }
}

/// Table forms are stored lowercase; carry over the lemma's leading capital
/// so they match what the suffix rules produce.
fn keep_capital(lemma: &str, form: &str) -> String {
    let mut chars = form.chars();
    match (lemma.chars().next(), chars.next()) {
        (Some(l), Some(first)) if l.is_uppercase() => first.to_uppercase().chain(chars).collect(),
        _ => form.to_string(),
    }
}

/// Replace any gender/number tags with the resolved ones.
fn retag(mut word: Word, gender: Gender, number: Number) -> Word {
    for g in Gender::ALL {
        word.tags.remove(g.as_str());
    }
    for n in Number::ALL {
        word.tags.remove(n.as_str());
    }
    word.with_tags([gender.as_str(), number.as_str()])
}
