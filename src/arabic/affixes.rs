//! Default affix inventories.
//!
//! The prefix list, suffix list and the verb/noun affix-pair tables are
//! generated once from small morpheme inventories: proclitics, inflectional
//! suffixes and object/possessive enclitics. Every listed prefix and suffix
//! takes part in at least one valid pair.

use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Conjunctions and prepositions that attach to indefinite nouns.
const NOUN_PROCLITICS: &[&str] = &[
    "", "و", "ف", "ب", "ك", "ل", "وب", "فب", "وك", "فك", "ول", "فل",
];

/// Proclitic chains ending in the definite article.
const DEFINITE_PREFIXES: &[&str] = &[
    "ال", "وال", "فال", "بال", "كال", "لل", "ولل", "فلل", "وبال", "فبال", "وكال", "فكال",
];

/// Inflectional noun endings, with the form each takes before an enclitic.
const NOUN_ENDINGS: &[(&str, Option<&str>)] = &[
    ("", Some("")),
    ("ة", Some("ت")),
    ("ات", Some("ات")),
    ("ان", Some("ا")),
    ("ين", Some("ي")),
    ("ون", Some("و")),
    ("ية", Some("يت")),
    ("تان", Some("تا")),
    ("تين", Some("تي")),
    ("يات", Some("يات")),
    ("ا", None),
];

/// Possessive pronouns attached to nouns.
const NOUN_ENCLITICS: &[&str] = &[
    "ي", "ه", "ها", "هم", "هن", "هما", "ك", "كم", "كن", "كما", "نا",
];

/// Object pronouns attached to verbs.
const VERB_ENCLITICS: &[&str] = &[
    "ني", "ه", "ها", "هم", "هن", "هما", "ك", "كم", "كن", "كما", "نا",
];

const CONJUNCTIONS: &[&str] = &["", "و", "ف"];

/// Future and jussive particles that precede the imperfect subject prefix.
const IMPERFECT_PARTICLES: &[&str] = &["", "س", "ل"];

const IMPERFECT_SUBJECTS: &[&str] = &["أ", "ت", "ن", "ي"];

const IMPERFECT_ENDINGS: &[(&str, &str)] = &[
    ("", ""),
    ("ون", "ون"),
    ("ين", "ين"),
    ("ان", "ان"),
    ("ن", "ن"),
    ("وا", "و"),
    ("ا", "ا"),
    ("ي", "ي"),
];

const PERFECT_PREFIXES: &[&str] = &["", "و", "ف", "أ", "أو", "أف"];

const PERFECT_ENDINGS: &[(&str, &str)] = &[
    ("", ""),
    ("ت", "ت"),
    ("تا", "تا"),
    ("تم", "تمو"),
    ("تن", "تن"),
    ("تما", "تما"),
    ("وا", "و"),
    ("ا", "ا"),
    ("نا", "نا"),
    ("ن", "ن"),
];

/// Build the key under which a prefix/suffix combination is stored.
pub fn pair_key(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}

/// Affix lists and pair tables used by the stemmer.
#[derive(Debug, Clone)]
pub struct AffixTables {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub verb_pairs: Vec<String>,
    pub noun_pairs: Vec<String>,
}

/// The generated default tables.
pub static DEFAULT_AFFIXES: LazyLock<AffixTables> = LazyLock::new(AffixTables::generate);

fn with_enclitics(endings: &[(&str, &str)], enclitics: &[&str]) -> Vec<String> {
    let mut suffixes = Vec::new();
    for (bare, bound) in endings {
        suffixes.push((*bare).to_string());
        for enclitic in enclitics {
            suffixes.push(format!("{bound}{enclitic}"));
        }
    }
    suffixes
}

fn cross(prefixes: &[String], suffixes: &[String], out: &mut BTreeSet<String>) {
    for prefix in prefixes {
        for suffix in suffixes {
            out.insert(pair_key(prefix, suffix));
        }
    }
}

impl AffixTables {
    fn generate() -> Self {
        let definite_prefixes: Vec<String> =
            DEFINITE_PREFIXES.iter().map(|p| p.to_string()).collect();
        let definite_suffixes: Vec<String> = NOUN_ENDINGS
            .iter()
            .map(|(bare, _)| bare.to_string())
            .collect();

        let noun_prefixes: Vec<String> = NOUN_PROCLITICS.iter().map(|p| p.to_string()).collect();
        let mut noun_suffixes = definite_suffixes.clone();
        for (_, bound) in NOUN_ENDINGS {
            if let Some(bound) = bound {
                for enclitic in NOUN_ENCLITICS {
                    noun_suffixes.push(format!("{bound}{enclitic}"));
                }
            }
        }

        let mut imperfect_prefixes = Vec::new();
        for interrogative in ["", "أ"] {
            for conjunction in CONJUNCTIONS {
                for particle in IMPERFECT_PARTICLES {
                    for subject in IMPERFECT_SUBJECTS {
                        imperfect_prefixes
                            .push(format!("{interrogative}{conjunction}{particle}{subject}"));
                    }
                }
            }
        }
        let imperfect_suffixes = with_enclitics(IMPERFECT_ENDINGS, VERB_ENCLITICS);

        let perfect_prefixes: Vec<String> =
            PERFECT_PREFIXES.iter().map(|p| p.to_string()).collect();
        let perfect_suffixes = with_enclitics(PERFECT_ENDINGS, VERB_ENCLITICS);

        let mut noun_pairs = BTreeSet::new();
        cross(&definite_prefixes, &definite_suffixes, &mut noun_pairs);
        cross(&noun_prefixes, &noun_suffixes, &mut noun_pairs);

        let mut verb_pairs = BTreeSet::new();
        cross(&imperfect_prefixes, &imperfect_suffixes, &mut verb_pairs);
        cross(&perfect_prefixes, &perfect_suffixes, &mut verb_pairs);

        let prefixes: BTreeSet<String> = definite_prefixes
            .into_iter()
            .chain(noun_prefixes)
            .chain(imperfect_prefixes)
            .chain(perfect_prefixes)
            .collect();
        let suffixes: BTreeSet<String> = noun_suffixes
            .into_iter()
            .chain(imperfect_suffixes)
            .chain(perfect_suffixes)
            .collect();

        AffixTables {
            prefixes: prefixes.into_iter().collect(),
            suffixes: suffixes.into_iter().collect(),
            verb_pairs: verb_pairs.into_iter().collect(),
            noun_pairs: noun_pairs.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(list: &[String], item: &str) -> bool {
        list.iter().any(|s| s == item)
    }

    #[test]
    fn test_prefix_and_suffix_lists() {
        let tables = &*DEFAULT_AFFIXES;

        for prefix in ["", "ال", "وبال", "ي", "سي", "وسن", "أفت", "لل"] {
            assert!(has(&tables.prefixes, prefix), "missing prefix {prefix}");
        }
        for suffix in ["", "ة", "ات", "ون", "ن", "ها", "تها", "تموها", "وني"] {
            assert!(has(&tables.suffixes, suffix), "missing suffix {suffix}");
        }
    }

    #[test]
    fn test_pair_tables() {
        let tables = &*DEFAULT_AFFIXES;

        assert!(has(&tables.noun_pairs, "ال-"));
        assert!(has(&tables.noun_pairs, "ال-ات"));
        assert!(has(&tables.noun_pairs, "و-ها"));
        assert!(!has(&tables.noun_pairs, "ال-ها"));

        assert!(has(&tables.verb_pairs, "ي-ون"));
        assert!(has(&tables.verb_pairs, "-وا"));
        assert!(has(&tables.verb_pairs, "ف-تموه"));
        assert!(!has(&tables.verb_pairs, "ال-"));
    }

    #[test]
    fn test_lists_are_sorted_and_unique() {
        let tables = &*DEFAULT_AFFIXES;
        for list in [&tables.prefixes, &tables.suffixes, &tables.verb_pairs] {
            assert!(list.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_pair_key() {
        assert_eq!(pair_key("ال", ""), "ال-");
        assert_eq!(pair_key("", "ون"), "-ون");
    }
}
