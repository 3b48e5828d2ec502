use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[macro_use]
mod macros;
mod api;
mod engine;
mod lexicon;

pub use api::{
    Options, assemble, assemble_with, conjugate, default_lexicon, find_next_elision, inflect, reduce_to_fixed_point,
    reduce_with_trace, variants,
};
pub use engine::{
    ConjugationParadigm, ElisionCandidate, ElisionEngine, MergeStep, Reduction, SentenceAssembler, VerbConjugator,
    WordFormGenerator, normalize,
};
pub use lexicon::{AdjectiveForms, ElisionRules, IrregularForm, IrregularVerb, Lexicon, LexiconError};

// --- Closed vocabularies ----------------------------------------------------

/// Error returned when parsing one of the closed vocabularies from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable lowercase name, also used as the tag label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == lower)
                    .ok_or_else(|| UnknownName { kind: $kind, value: s.to_string() })
            }
        }
    };
}

named_enum! {
    /// Grammatical category of a [`Word`] and the constraint of a [`SentenceSlot`].
    PartOfSpeech, "part of speech" {
        Subject => "subject",
        Verb => "verb",
        AuxiliaryVerb => "auxiliary-verb",
        InfinitiveVerb => "infinitive-verb",
        PastParticipleVerb => "past-participle-verb",
        Article => "article",
        Possessive => "possessive",
        Noun => "noun",
        Adjective => "adjective",
        Preposition => "preposition",
        Adverb => "adverb",
        Object => "object",
        Connector => "connector",
        Negation => "negation",
    }
}

named_enum! {
    Gender, "gender" {
        Masculine => "masculine",
        Feminine => "feminine",
    }
}

named_enum! {
    Number, "number" {
        Singular => "singular",
        Plural => "plural",
    }
}

/// Tag carried by nouns whose feminine form comes from the irregular table.
pub const MUTABLE_TAG: &str = "mutable";

bitflags::bitflags! {
    /// Grammatical persons served by a conjugated form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Persons: u8 {
        const FIRST_SINGULAR  = 1 << 0;
        const SECOND_SINGULAR = 1 << 1;
        const THIRD_SINGULAR  = 1 << 2;
        const FIRST_PLURAL    = 1 << 3;
        const SECOND_PLURAL   = 1 << 4;
        const THIRD_PLURAL    = 1 << 5;
    }
}

static PERSON_LABELS: [(Persons, &str); 6] = [
    (Persons::FIRST_SINGULAR, "1sg"),
    (Persons::SECOND_SINGULAR, "2sg"),
    (Persons::THIRD_SINGULAR, "3sg"),
    (Persons::FIRST_PLURAL, "1pl"),
    (Persons::SECOND_PLURAL, "2pl"),
    (Persons::THIRD_PLURAL, "3pl"),
];

impl Persons {
    /// Tag labels (`"1sg"`, `"3pl"`, ...) for every person in the set.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        PERSON_LABELS.iter().filter(move |(p, _)| self.contains(*p)).map(|(_, label)| *label)
    }

    pub fn from_label(label: &str) -> Option<Persons> {
        PERSON_LABELS.iter().find(|(_, l)| *l == label).map(|(p, _)| *p)
    }
}

// --- Word -------------------------------------------------------------------

/// Where a [`Word`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    /// Drawn from the lexicon or produced by inflection/conjugation.
    #[default]
    Base,
    /// Produced by merging two slots (`je` + `ai` -> `j'ai`).
    Elided,
}

/// An immutable lexical value. Inflection never mutates a `Word`; it returns a
/// new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    pub text: String,
    pub part_of_speech: PartOfSpeech,
    pub translation: String,
    pub tags: BTreeSet<String>,
    pub origin: Origin,
}

impl Word {
    pub fn new(text: impl Into<String>, part_of_speech: PartOfSpeech, translation: impl Into<String>) -> Self {
        Word {
            text: text.into(),
            part_of_speech,
            translation: translation.into(),
            tags: BTreeSet::new(),
            origin: Origin::Base,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        self.with_tags([tag])
    }

    /// Same word, different surface form.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Word { text: text.into(), ..self.clone() }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn gender(&self) -> Option<Gender> {
        Gender::ALL.iter().copied().find(|g| self.has_tag(g.as_str()))
    }

    pub fn number(&self) -> Option<Number> {
        Number::ALL.iter().copied().find(|n| self.has_tag(n.as_str()))
    }

    /// Persons recorded on a conjugated form (empty for anything else).
    pub fn persons(&self) -> Persons {
        self.tags.iter().filter_map(|t| Persons::from_label(t)).fold(Persons::empty(), |acc, p| acc | p)
    }

    pub fn is_elided(&self) -> bool {
        self.origin == Origin::Elided
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// --- Sentence slots ---------------------------------------------------------

/// Stable identity of a slot; survives merges (the merged slot keeps the id of
/// the left-hand slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered position in the sentence under construction.
///
/// The engine does not check that `value` matches `part_of_speech`; keeping
/// them aligned is the caller's job (see [`SentenceSlot::with_value`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSlot {
    pub id: SlotId,
    pub part_of_speech: PartOfSpeech,
    pub value: Option<Word>,
    pub placeholder: String,
    pub fixed: bool,
}

impl SentenceSlot {
    /// An empty slot waiting for a word of `part_of_speech`.
    pub fn new(id: u32, part_of_speech: PartOfSpeech, placeholder: impl Into<String>) -> Self {
        SentenceSlot { id: SlotId(id), part_of_speech, value: None, placeholder: placeholder.into(), fixed: false }
    }

    /// A slot already holding `word`, typed and labelled after it.
    pub fn filled(id: u32, word: Word) -> Self {
        let pos = word.part_of_speech;
        SentenceSlot::new(id, pos, pos.as_str()).with_value(word)
    }

    /// Assign `word`, retyping the slot to the occupant's part of speech.
    pub fn with_value(mut self, word: Word) -> Self {
        self.part_of_speech = word.part_of_speech;
        self.value = Some(word);
        self
    }

    /// Mark the slot as pre-filled and non-editable.
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.value.as_ref().map(|w| w.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}
