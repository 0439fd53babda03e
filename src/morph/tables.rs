//! Morphology code tables.
//!
//! Greek codes follow the positional layout of the Greek CNTR morphology
//! (role at position 2, type at 3, then mood through "other"). Hebrew and
//! Aramaic codes follow the OSHB layout: a part-of-speech letter followed
//! by one letter per parameter.

/// A positional parameter of a Hebrew or Aramaic part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Param {
    Stem,
    VerbForm,
    Person,
    Gender,
    Number,
    State,
    AdjectiveType,
    NounType,
    PronounType,
    PrepositionType,
    SuffixType,
    ParticleType,
}

use Param::*;

/// Greek role at position 2.
pub(super) fn greek_role(code: &str) -> Option<&'static str> {
    Some(match code {
        "N" => "noun",
        "A" => "adjective",
        "E" => "determiner",
        "R" => "pronoun",
        "V" => "verb",
        "I" => "interjection",
        "P" => "preposition",
        "D" => "adverb",
        "C" => "conjunction",
        "T" => "particle",
        _ => return None,
    })
}

/// Greek type at position 3, which depends on the role.
pub(super) fn greek_type(role: &str, code: &str) -> Option<&'static str> {
    Some(match (role, code) {
        ("N", "S") => "substatitive_adj",
        ("N", "P") => "predicate_adj",
        ("A", "A") => "ascriptive",
        ("A", "R") => "restrictive",
        ("E", "A") => "article",
        ("E", "D") => "demonstrative",
        ("E", "F") => "differential",
        ("E", "P") => "possessive",
        ("E", "Q") => "quantifier",
        ("E", "N") => "number",
        ("E", "O") => "ordinal",
        ("E", "R") => "relative",
        ("E", "T") => "interrogative",
        ("R", "D") => "demonstrative",
        ("R", "P") => "personal",
        ("R", "E") => "reflexive",
        ("R", "C") => "reciprocal",
        ("R", "I") => "indefinite",
        ("R", "R") => "relative",
        ("R", "T") => "interrogative",
        ("V", "T") => "transitive",
        ("V", "I") => "intransitive",
        ("V", "L") => "linking",
        ("V", "M") => "modal",
        ("V", "P") => "periphrastic",
        ("I", "E") => "exclamation",
        ("I", "D") => "directive",
        ("I", "R") => "response",
        ("P", "I") => "improper",
        ("D", "O") => "correlative",
        ("C", "C") => "coordinating",
        ("C", "S") => "subordinating",
        ("C", "O") => "correlative",
        ("T", "F") => "foreign",
        ("T", "E") => "error",
        _ => return None,
    })
}

/// Greek code at positions 4 through 11.
pub(super) fn greek_position(index: usize, code: &str) -> Option<&'static str> {
    Some(match (index, code) {
        // mood
        (4, "I") => "indicative",
        (4, "M") => "imperative",
        (4, "S") => "subjunctive",
        (4, "O") => "optative",
        (4, "N") => "infinitive",
        (4, "P") => "participle",
        // tense
        (5, "P") => "present",
        (5, "I") => "imperfect",
        (5, "F") => "future",
        (5, "A") => "aorist",
        (5, "E") => "perfect",
        (5, "L") => "pluperfect",
        // voice
        (6, "A") => "active",
        (6, "M") => "middle",
        (6, "P") => "passive",
        // person
        (7, "1") => "first",
        (7, "2") => "second",
        (7, "3") => "third",
        // case
        (8, "N") => "nominative",
        (8, "G") => "genitive",
        (8, "D") => "dative",
        (8, "A") => "accusative",
        (8, "V") => "vocative",
        // gender
        (9, "M") => "masculine",
        (9, "F") => "feminine",
        (9, "N") => "neuter",
        // number
        (10, "S") => "singular",
        (10, "P") => "plural",
        // other
        (11, "C") => "comparative",
        (11, "S") => "superlatives",
        (11, "D") => "diminutive",
        (11, "I") => "indeclinable",
        _ => return None,
    })
}

const NO_PARAMS: &[Param] = &[];
const ADJECTIVE: &[Param] = &[AdjectiveType, Gender, Number, State];
const NOUN: &[Param] = &[NounType, Gender, Number, State];
const PRONOUN: &[Param] = &[PronounType, Person, Gender, Number];
const PREPOSITION: &[Param] = &[PrepositionType];
const SUFFIX: &[Param] = &[SuffixType, Person, Gender, Number];
const PARTICLE: &[Param] = &[ParticleType];
const VERB: &[Param] = &[Stem, VerbForm, Person, Gender, Number, State];

/// Hebrew/Aramaic part of speech and the parameters that follow it.
pub(super) fn part_of_speech(code: char) -> Option<(&'static str, &'static [Param])> {
    Some(match code {
        'A' => ("adjective", ADJECTIVE),
        'C' => ("conjunction", NO_PARAMS),
        'D' => ("adverb", NO_PARAMS),
        'N' => ("noun", NOUN),
        'P' => ("pronoun", PRONOUN),
        'R' => ("preposition", PREPOSITION),
        'S' => ("suffix", SUFFIX),
        'T' => ("particle", PARTICLE),
        'V' => ("verb", VERB),
        _ => return None,
    })
}

/// Value of one Hebrew/Aramaic parameter letter.
pub(super) fn param_value(param: Param, code: char, aramaic: bool) -> Option<&'static str> {
    match param {
        Stem if aramaic => aramaic_stem(code),
        Stem => hebrew_stem(code),
        VerbForm => verb_form(code),
        Person => match code {
            '1' => Some("first"),
            '2' => Some("second"),
            '3' => Some("third"),
            _ => None,
        },
        Gender => match code {
            'b' => Some("both_genders"),
            'c' => Some("common"),
            'f' => Some("feminine"),
            'm' => Some("masculine"),
            _ => None,
        },
        Number => match code {
            'd' => Some("dual"),
            'p' => Some("plural"),
            's' => Some("singular"),
            _ => None,
        },
        State => match code {
            'a' => Some("absolute"),
            'c' => Some("construct"),
            'd' => Some("determined"),
            _ => None,
        },
        AdjectiveType => match code {
            'a' => Some("adjective"),
            'c' => Some("cardinal_number"),
            'g' => Some("gentilic"),
            'o' => Some("ordinal_number"),
            _ => None,
        },
        NounType => match code {
            'c' => Some("common"),
            'g' => Some("gentilic"),
            'p' => Some("proper_name"),
            _ => None,
        },
        PronounType => match code {
            'd' => Some("demonstrative"),
            'f' => Some("indefinite"),
            'i' => Some("interrogative"),
            'p' => Some("personal"),
            'r' => Some("relative"),
            _ => None,
        },
        PrepositionType => match code {
            'd' => Some("definite_article"),
            _ => None,
        },
        SuffixType => match code {
            'd' => Some("directional_he"),
            'h' => Some("paragogic_he"),
            'n' => Some("paragogic_nun"),
            'p' => Some("pronominal"),
            _ => None,
        },
        ParticleType => match code {
            'a' => Some("affirmation"),
            'd' => Some("definite_article"),
            'e' => Some("exhortation"),
            'i' => Some("interrogative"),
            'j' => Some("interjection"),
            'm' => Some("demonstrative"),
            'n' => Some("negative"),
            'o' => Some("direct_object_marker"),
            'r' => Some("relative"),
            _ => None,
        },
    }
}

fn verb_form(code: char) -> Option<&'static str> {
    Some(match code {
        'p' => "perfect_qatal",
        'q' => "sequential_perfect_weqatal",
        'i' => "imperfect_yiqtol",
        'w' => "sequential_imperfect_wayyiqtol",
        'h' => "cohortative",
        'j' => "jussive",
        'v' => "imperative",
        'r' => "participle_active",
        's' => "participle_passive",
        'a' => "infinitive_absolute",
        'c' => "infinitive_construct",
        _ => return None,
    })
}

fn hebrew_stem(code: char) -> Option<&'static str> {
    Some(match code {
        'q' => "qal",
        'N' => "niphal",
        'p' => "piel",
        'P' => "pual",
        'h' => "hiphil",
        'H' => "hophal",
        't' => "hithpael",
        'o' => "polel",
        'O' => "polal",
        'r' => "hithpolel",
        'm' => "poel",
        'M' => "poal",
        'k' => "palel",
        'K' => "pulal",
        'Q' => "qal_passive",
        'l' => "pilpel",
        'L' => "polpal",
        'f' => "hithpalpel",
        'D' => "nithpael",
        'j' => "pealal",
        'i' => "pilel",
        'u' => "hothpaal",
        'c' => "tiphil",
        'v' => "hishtaphel",
        'w' => "nithpalel",
        'y' => "nithpoel",
        'z' => "hithpoel",
        _ => return None,
    })
}

fn aramaic_stem(code: char) -> Option<&'static str> {
    Some(match code {
        'q' => "peal",
        'Q' => "peil",
        'u' => "hithpeel",
        'p' => "pael",
        'P' => "ithpaal",
        'M' => "hithpaal",
        'a' => "aphel",
        'h' => "haphel",
        's' => "saphel",
        'e' => "shaphel",
        'H' => "hophal",
        'i' => "ithpeel",
        't' => "hishtaphel",
        'v' => "ishtaphel",
        'w' => "hithaphel",
        'o' => "polel",
        'z' => "ithpoel",
        'r' => "hithpolel",
        'f' => "hithpalpel",
        'b' => "hephal",
        'c' => "tiphel",
        'm' => "poel",
        'l' => "palpel",
        'L' => "ithpalpal",
        'O' => "ithpolel",
        'G' => "ittaphal",
        _ => return None,
    })
}
