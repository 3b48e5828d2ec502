//! Base vocabulary, one table per part of speech.
//!
//! Entries are `(text, translation, tags)`. Nouns whose feminine comes from
//! the irregular table carry [`MUTABLE_TAG`]; everything else is tagged only with
//! what a caller needs to pick agreeing forms.

use crate::{MUTABLE_TAG, PartOfSpeech};

pub(super) type Entry = (&'static str, &'static str, &'static [&'static str]);

const SUBJECTS: &[Entry] = &[
    ("je", "I", &["1sg"]),
    ("tu", "you", &["2sg"]),
    ("il", "he", &["3sg", "masculine"]),
    ("elle", "she", &["3sg", "feminine"]),
    ("on", "one", &["3sg"]),
    ("ce", "it", &["3sg"]),
    ("nous", "we", &["1pl"]),
    ("vous", "you", &["2pl"]),
    ("ils", "they", &["3pl", "masculine"]),
    ("elles", "they", &["3pl", "feminine"]),
];

const VERBS: &[Entry] = &[
    ("manger", "to eat", &[]),
    ("parler", "to speak", &[]),
    ("aimer", "to love", &[]),
    ("regarder", "to watch", &[]),
    ("écouter", "to listen", &[]),
    ("jouer", "to play", &[]),
    ("travailler", "to work", &[]),
    ("chercher", "to look for", &[]),
    ("habiter", "to live", &[]),
    ("arriver", "to arrive", &[]),
    ("étudier", "to study", &[]),
    ("commencer", "to begin", &[]),
    ("voyager", "to travel", &[]),
    ("nager", "to swim", &[]),
    ("envoyer", "to send", &[]),
    ("payer", "to pay", &[]),
    ("nettoyer", "to clean", &[]),
    ("finir", "to finish", &[]),
    ("prendre", "to take", &[]),
];

const AUXILIARY_VERBS: &[Entry] = &[("avoir", "to have", &[]), ("être", "to be", &[]), ("aller", "to go", &[])];

const ARTICLES: &[Entry] = &[
    ("le", "the", &["masculine", "singular"]),
    ("la", "the", &["feminine", "singular"]),
    ("les", "the", &["plural"]),
    ("un", "a", &["masculine", "singular"]),
    ("une", "a", &["feminine", "singular"]),
    ("des", "some", &["plural"]),
    ("du", "some", &["masculine", "singular"]),
];

const POSSESSIVES: &[Entry] = &[
    ("mon", "my", &["masculine", "singular", "1sg"]),
    ("ma", "my", &["feminine", "singular", "1sg"]),
    ("mes", "my", &["plural", "1sg"]),
    ("ton", "your", &["masculine", "singular", "2sg"]),
    ("ta", "your", &["feminine", "singular", "2sg"]),
    ("tes", "your", &["plural", "2sg"]),
    ("son", "his/her", &["masculine", "singular", "3sg"]),
    ("sa", "his/her", &["feminine", "singular", "3sg"]),
    ("ses", "his/her", &["plural", "3sg"]),
    ("notre", "our", &["singular", "1pl"]),
    ("votre", "your", &["singular", "2pl"]),
    ("leur", "their", &["singular", "3pl"]),
];

const NOUNS: &[Entry] = &[
    ("chat", "cat", &["masculine", MUTABLE_TAG]),
    ("chien", "dog", &["masculine", MUTABLE_TAG]),
    ("lion", "lion", &["masculine", MUTABLE_TAG]),
    ("acteur", "actor", &["masculine", MUTABLE_TAG]),
    ("chanteur", "singer", &["masculine", MUTABLE_TAG]),
    ("directeur", "director", &["masculine", MUTABLE_TAG]),
    ("prince", "prince", &["masculine", MUTABLE_TAG]),
    ("roi", "king", &["masculine", MUTABLE_TAG]),
    ("copain", "friend", &["masculine", MUTABLE_TAG]),
    ("ami", "friend", &["masculine"]),
    ("étudiant", "student", &["masculine"]),
    ("boulanger", "baker", &["masculine"]),
    ("veuf", "widower", &["masculine"]),
    ("époux", "spouse", &["masculine"]),
    ("avion", "plane", &["masculine"]),
    ("homme", "man", &["masculine"]),
    ("animal", "animal", &["masculine"]),
    ("bateau", "boat", &["masculine"]),
    ("jeu", "game", &["masculine"]),
    ("livre", "book", &["masculine"]),
    ("hôtel", "hotel", &["masculine"]),
    ("pomme", "apple", &["feminine"]),
    ("école", "school", &["feminine"]),
    ("maison", "house", &["feminine"]),
    ("eau", "water", &["feminine"]),
];

const ADJECTIVES: &[Entry] = &[
    ("grand", "big", &[]),
    ("petit", "small", &[]),
    ("beau", "beautiful", &[]),
    ("nouveau", "new", &[]),
    ("vieux", "old", &[]),
    ("bon", "good", &[]),
    ("blanc", "white", &[]),
    ("long", "long", &[]),
    ("gentil", "kind", &[]),
    ("heureux", "happy", &[]),
    ("actif", "active", &[]),
    ("gros", "fat", &[]),
    ("fou", "crazy", &[]),
    ("sec", "dry", &[]),
    ("frais", "fresh", &[]),
    ("doux", "soft", &[]),
    ("rouge", "red", &[]),
    ("jeune", "young", &[]),
    ("intelligent", "intelligent", &[]),
    ("français", "French", &[]),
];

const PREPOSITIONS: &[Entry] = &[
    ("à", "to", &[]),
    ("de", "of", &[]),
    ("dans", "in", &[]),
    ("avec", "with", &[]),
    ("pour", "for", &[]),
    ("sur", "on", &[]),
    ("sous", "under", &[]),
    ("chez", "at the home of", &[]),
    ("jusque", "until", &[]),
];

const ADVERBS: &[Entry] = &[
    ("très", "very", &[]),
    ("bien", "well", &[]),
    ("souvent", "often", &[]),
    ("toujours", "always", &[]),
    ("hier", "yesterday", &[]),
    ("ici", "here", &[]),
    ("encore", "again", &[]),
    ("déjà", "already", &[]),
];

const OBJECTS: &[Entry] = &[
    ("me", "me", &["1sg"]),
    ("te", "you", &["2sg"]),
    ("se", "oneself", &["3sg", "3pl"]),
    ("le", "him", &["3sg", "masculine"]),
    ("la", "her", &["3sg", "feminine"]),
    ("lui", "to him/her", &["3sg"]),
    ("nous", "us", &["1pl"]),
    ("vous", "you", &["2pl"]),
    ("les", "them", &["3pl"]),
    ("leur", "to them", &["3pl"]),
];

const CONNECTORS: &[Entry] = &[
    ("et", "and", &[]),
    ("mais", "but", &[]),
    ("ou", "or", &[]),
    ("que", "that", &[]),
    ("si", "if", &[]),
    ("quand", "when", &[]),
    ("parce que", "because", &[]),
];

const NEGATIONS: &[Entry] = &[
    ("ne", "not", &[]),
    ("pas", "not", &[]),
    ("jamais", "never", &[]),
    ("rien", "nothing", &[]),
    ("plus", "no longer", &[]),
];

pub(super) const BASE_WORDS: &[(PartOfSpeech, &[Entry])] = &[
    (PartOfSpeech::Subject, SUBJECTS),
    (PartOfSpeech::Verb, VERBS),
    (PartOfSpeech::AuxiliaryVerb, AUXILIARY_VERBS),
    (PartOfSpeech::Article, ARTICLES),
    (PartOfSpeech::Possessive, POSSESSIVES),
    (PartOfSpeech::Noun, NOUNS),
    (PartOfSpeech::Adjective, ADJECTIVES),
    (PartOfSpeech::Preposition, PREPOSITIONS),
    (PartOfSpeech::Adverb, ADVERBS),
    (PartOfSpeech::Object, OBJECTS),
    (PartOfSpeech::Connector, CONNECTORS),
    (PartOfSpeech::Negation, NEGATIONS),
];
