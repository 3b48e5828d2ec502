use crate::engine::{
    ConjugationParadigm, ElisionCandidate, ElisionEngine, Reduction, SentenceAssembler, VerbConjugator,
    WordFormGenerator,
};
use crate::{Gender, Lexicon, Number, SentenceSlot, Word};
use once_cell::sync::Lazy;

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::french);

/// The built-in French lexicon, built on first use and shared afterwards.
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

/// Options that affect sentence assembly.
#[derive(Debug, Clone)]
pub struct Options {
    /// Run the string-level contraction pass over the assembled text.
    pub normalize_text: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { normalize_text: true }
    }
}

/// Inflect a noun or adjective with the default lexicon.
///
/// # Example
/// ```
/// use accord::{Gender, Number, PartOfSpeech, Word, inflect};
///
/// let chat = Word::new("chat", PartOfSpeech::Noun, "cat");
/// assert_eq!(inflect(&chat, Gender::Feminine, Number::Singular).text, "chatte");
/// ```
pub fn inflect(word: &Word, gender: Gender, number: Number) -> Word {
    WordFormGenerator::new(default_lexicon()).inflect(word, gender, number)
}

/// All four agreement variants of `word` (see [`WordFormGenerator::variants`]).
pub fn variants(word: &Word) -> Vec<Word> {
    WordFormGenerator::new(default_lexicon()).variants(word)
}

/// Conjugate an infinitive with the default lexicon.
///
/// # Example
/// ```
/// use accord::{PartOfSpeech, Word, conjugate};
///
/// let paradigm = conjugate(&Word::new("manger", PartOfSpeech::Verb, "to eat"));
/// assert_eq!(paradigm.forms[2].text, "mangeons");
/// assert_eq!(paradigm.past_participle.unwrap().text, "mangé");
/// ```
pub fn conjugate(infinitive: &Word) -> ConjugationParadigm {
    VerbConjugator::new(default_lexicon()).conjugate(infinitive)
}

/// First contracting pair in `slots`, if any.
pub fn find_next_elision(slots: &[SentenceSlot]) -> Option<ElisionCandidate> {
    ElisionEngine::new(default_lexicon()).find_next_elision(slots)
}

/// Merge until no contracting pair remains.
///
/// # Example
/// ```
/// use accord::{PartOfSpeech, SentenceSlot, Word, assemble, reduce_to_fixed_point};
///
/// let slots = vec![
///     SentenceSlot::filled(0, Word::new("Je", PartOfSpeech::Subject, "I")),
///     SentenceSlot::filled(1, Word::new("ai", PartOfSpeech::AuxiliaryVerb, "have")),
///     SentenceSlot::filled(2, Word::new("un", PartOfSpeech::Article, "a")),
///     SentenceSlot::filled(3, Word::new("chat", PartOfSpeech::Noun, "cat")),
/// ];
/// let reduced = reduce_to_fixed_point(slots);
/// assert_eq!(reduced.len(), 3);
/// assert_eq!(assemble(&reduced), "j'ai un chat");
/// ```
pub fn reduce_to_fixed_point(slots: Vec<SentenceSlot>) -> Vec<SentenceSlot> {
    ElisionEngine::new(default_lexicon()).reduce_to_fixed_point(slots)
}

/// Like [`reduce_to_fixed_point`] but keeps every intermediate step.
pub fn reduce_with_trace(slots: Vec<SentenceSlot>) -> Reduction {
    ElisionEngine::new(default_lexicon()).reduce_with_trace(slots)
}

/// Final text for `slots` with default [`Options`].
pub fn assemble(slots: &[SentenceSlot]) -> String {
    assemble_with(slots, &Options::default())
}

pub fn assemble_with(slots: &[SentenceSlot], options: &Options) -> String {
    let assembler =
        if options.normalize_text { SentenceAssembler::new() } else { SentenceAssembler::without_normalization() };
    assembler.assemble(slots)
}
