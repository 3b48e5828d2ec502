//! Exception tables: forms that suffix rules get wrong, and the fixed
//! contraction rules.

use crate::Persons;

/// Masculine lemma -> feminine noun.
pub(super) const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("chat", "chatte"),
    ("chien", "chienne"),
    ("lion", "lionne"),
    ("acteur", "actrice"),
    ("chanteur", "chanteuse"),
    ("directeur", "directrice"),
    ("prince", "princesse"),
    ("roi", "reine"),
    ("copain", "copine"),
];

/// `(lemma, feminine singular, masculine plural, feminine plural)`.
pub(super) const IRREGULAR_ADJECTIVES: &[(&str, &str, &str, &str)] = &[
    ("beau", "belle", "beaux", "belles"),
    ("nouveau", "nouvelle", "nouveaux", "nouvelles"),
    ("vieux", "vieille", "vieux", "vieilles"),
    ("bon", "bonne", "bons", "bonnes"),
    ("blanc", "blanche", "blancs", "blanches"),
    ("long", "longue", "longs", "longues"),
    ("gentil", "gentille", "gentils", "gentilles"),
    ("heureux", "heureuse", "heureux", "heureuses"),
    ("actif", "active", "actifs", "actives"),
    ("gros", "grosse", "gros", "grosses"),
    ("fou", "folle", "fous", "folles"),
    ("sec", "sèche", "secs", "sèches"),
    ("frais", "fraîche", "frais", "fraîches"),
    ("doux", "douce", "doux", "douces"),
];

pub(super) type FixedForm = (&'static str, &'static str, Persons);

/// `(infinitive, past participle, participle gloss, present forms)`.
pub(super) const IRREGULAR_VERBS: &[(&str, &str, &str, [FixedForm; 6])] = &[
    (
        "avoir",
        "eu",
        "had",
        [
            ("ai", "have", Persons::FIRST_SINGULAR),
            ("as", "have", Persons::SECOND_SINGULAR),
            ("a", "has", Persons::THIRD_SINGULAR),
            ("avons", "have", Persons::FIRST_PLURAL),
            ("avez", "have", Persons::SECOND_PLURAL),
            ("ont", "have", Persons::THIRD_PLURAL),
        ],
    ),
    (
        "être",
        "été",
        "been",
        [
            ("suis", "am", Persons::FIRST_SINGULAR),
            ("es", "are", Persons::SECOND_SINGULAR),
            ("est", "is", Persons::THIRD_SINGULAR),
            ("sommes", "are", Persons::FIRST_PLURAL),
            ("êtes", "are", Persons::SECOND_PLURAL),
            ("sont", "are", Persons::THIRD_PLURAL),
        ],
    ),
    (
        "aller",
        "allé",
        "gone",
        [
            ("vais", "go", Persons::FIRST_SINGULAR),
            ("vas", "go", Persons::SECOND_SINGULAR),
            ("va", "goes", Persons::THIRD_SINGULAR),
            ("allons", "go", Persons::FIRST_PLURAL),
            ("allez", "go", Persons::SECOND_PLURAL),
            ("vont", "go", Persons::THIRD_PLURAL),
        ],
    ),
];

/// Words that drop their final vowel before a vowel-initial word.
pub(super) const ELISION_TRIGGERS: &[&str] = &["je", "me", "te", "se", "le", "la", "de", "ne", "que", "jusque", "si", "ce"];

/// First letters that make a following word vowel-initial (`h` included).
pub(super) const VOWEL_INITIALS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'h', 'é', 'è', 'ê'];

/// Triggers that only elide before specific beginnings.
pub(super) const ELISION_RESTRICTIONS: &[(&str, &[&str])] = &[("si", &["il"]), ("ce", &["est", "ét"])];
