//! Root extraction.
//!
//! The root of a stem is read off its starred pattern: letters at joker
//! positions are radicals. Weak radicals that disappear in conjugation are
//! restored for two-letter results, and across all segments of a word the
//! most frequent dictionary-backed root wins.

use std::fmt;

use ahash::AHashMap;

use crate::arabic::dictionary::RootDictionary;
use crate::arabic::letters::{ALEF, ALEF_MAKSURA, TEH_MARBUTA, WAW, YEH};
use crate::arabic::normalize::{expand_alef_madda, normalize_hamza};
use crate::arabic::stopwords::StopwordTable;

/// Shortest and longest accepted root.
pub const ROOT_LENGTHS: std::ops::RangeInclusive<usize> = 2..=4;

/// Canonicalize a root for comparison with the dictionary.
///
/// Alef-Madda expands to Hamza + Alef before the Hamza carriers are unified,
/// so `آمن` keeps its Hamza while `أمن` folds to `امن`.
pub fn normalize_root(root: &str) -> String {
    let root: String = expand_alef_madda(root)
        .chars()
        .filter(|&c| c != TEH_MARBUTA)
        .map(|c| if c == ALEF_MAKSURA { YEH } else { c })
        .collect();
    normalize_hamza(&root)
}

fn weak_to_radical(c: char) -> char {
    match c {
        ALEF => WAW,
        ALEF_MAKSURA => YEH,
        other => other,
    }
}

/// Restore the missing radical of a two-letter root from its pattern.
///
/// A three-character pattern is read as the root itself: its jokers take the
/// root letters in order and weak pattern letters become radicals. When the
/// jokers and root letters don't line up, the general rules below apply.
pub fn adjust_root(root: &str, pattern: &str, joker: char) -> String {
    let pattern: Vec<char> = pattern.chars().collect();
    let (Some(&first), Some(&last)) = (pattern.first(), pattern.last()) else {
        return root.to_string();
    };
    let root: Vec<char> = root.chars().collect();

    if pattern.len() == 3 {
        let jokers = pattern.iter().filter(|&&c| c == joker).count();
        if jokers == 0 || jokers == root.len() {
            let mut radicals = root.iter().copied();
            return pattern
                .into_iter()
                .map(|c| {
                    if c == joker {
                        radicals.next().unwrap_or(joker)
                    } else {
                        weak_to_radical(c)
                    }
                })
                .collect();
        }
    }

    let mut adjusted = root.clone();

    if first == ALEF || first == WAW {
        adjusted.insert(0, WAW);
    } else if first == YEH {
        adjusted.insert(0, YEH);
    } else if first == joker && (last == ALEF || last == WAW) {
        adjusted.push(WAW);
    } else if first == joker && (last == ALEF_MAKSURA || last == YEH) {
        adjusted.push(YEH);
    } else if first == joker && last == joker {
        if pattern.len() == 2 {
            if let Some(&end) = root.last() {
                adjusted.push(end);
            }
        } else if root.len() >= 2 {
            adjusted = vec![root[0], WAW, root[1]];
        }
    }

    adjusted.into_iter().collect()
}

/// The most frequent candidate, preferring three-letter roots.
///
/// Ties go to the lexicographically smallest candidate.
pub fn most_common<S: AsRef<str>>(candidates: &[S]) -> Option<String> {
    let has_triliteral = candidates
        .iter()
        .any(|c| c.as_ref().chars().count() == 3);

    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if !has_triliteral || candidate.chars().count() == 3 {
            *counts.entry(candidate).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then_with(|| b.cmp(a)))
        .map(|(root, _)| root.to_string())
}

/// Derives roots from stems and picks among candidates.
#[derive(Clone, Copy)]
pub struct RootExtractor<'a> {
    joker: char,
    dictionary: &'a dyn RootDictionary,
    stopwords: &'a dyn StopwordTable,
}

impl<'a> RootExtractor<'a> {
    pub fn new(
        joker: char,
        dictionary: &'a dyn RootDictionary,
        stopwords: &'a dyn StopwordTable,
    ) -> Self {
        RootExtractor {
            joker,
            dictionary,
            stopwords,
        }
    }

    /// Extract the root of a stem given its starred pattern.
    pub fn extract_root(&self, stem: &str, starstem: &str) -> String {
        let stem_chars: Vec<char> = stem.chars().collect();
        let star_chars: Vec<char> = starstem.chars().collect();
        let root: String = if stem_chars.len() == 3 {
            stem_chars.into_iter().map(weak_to_radical).collect()
        } else if star_chars.len() == stem_chars.len() {
            stem_chars
                .iter()
                .zip(&star_chars)
                .filter(|&(_, &mark)| mark == self.joker)
                .map(|(&c, _)| c)
                .collect()
        } else {
            stem.to_string()
        };

        let root = normalize_root(&root);
        if root.chars().count() == 2 {
            adjust_root(&root, starstem, self.joker)
        } else {
            root
        }
    }

    /// Pick the root of `word` among per-segment candidates.
    ///
    /// Stopwords resolve to their listed root. Otherwise candidates outside
    /// two to four letters are dropped, known roots are preferred, and the
    /// most frequent remaining candidate wins. Returns an empty string when
    /// no candidate has a valid length.
    pub fn choose_root<S: AsRef<str>>(&self, word: &str, candidates: &[S]) -> String {
        if let Some(root) = self.stopwords.root_of(word) {
            return root;
        }

        let valid: Vec<&str> = candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|root| ROOT_LENGTHS.contains(&root.chars().count()))
            .collect();
        if valid.is_empty() {
            return String::new();
        }

        let known: Vec<&str> = valid
            .iter()
            .copied()
            .filter(|root| self.dictionary.contains(root))
            .collect();
        let pool = if known.is_empty() { valid } else { known };

        most_common(&pool).unwrap_or_default()
    }
}

impl fmt::Debug for RootExtractor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootExtractor")
            .field("joker", &self.joker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arabic::dictionary::RootList;
    use crate::arabic::stopwords::StopwordDictionary;

    fn fixture() -> (RootList, StopwordDictionary) {
        (
            RootList::new(["كتب", "درس", "قول", "سأل"]),
            StopwordDictionary::from_json(r#"{"كانت": {"stem": "كان", "root": "كون"}}"#).unwrap(),
        )
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_root("آمن"), "ءامن");
        assert_eq!(normalize_root("سأل"), "سال");
        assert_eq!(normalize_root("أكل"), "اكل");
        assert_eq!(normalize_root("إذن"), "اذن");
        assert_eq!(normalize_root("بئر"), "بءر");
        assert_eq!(normalize_root("لؤم"), "لءم");
        assert_eq!(normalize_root("رمى"), "رمي");
        assert_eq!(normalize_root("كتبة"), "كتب");
    }

    #[test]
    fn test_adjust_root() {
        // Three-character patterns are the root.
        assert_eq!(adjust_root("قل", "قال", '*'), "قول");
        assert_eq!(adjust_root("رم", "رمى", '*'), "رمي");
        // Initial weak radical.
        assert_eq!(adjust_root("عد", "اع*د", '*'), "وعد");
        assert_eq!(adjust_root("بس", "ي*بس", '*'), "يبس");
        // Final weak radical.
        assert_eq!(adjust_root("دع", "*ا*و", '*'), "دعو");
        assert_eq!(adjust_root("مش", "*ا*ي", '*'), "مشي");
        // Jokers of a three-character pattern take the root letters.
        assert_eq!(adjust_root("قل", "*ا*", '*'), "قول");
        assert_eq!(adjust_root("دع", "**ا", '*'), "دعو");
        // Doubled or hollow.
        assert_eq!(adjust_root("مد", "**", '*'), "مدد");
        assert_eq!(adjust_root("صل", "***", '*'), "صول");
        assert_eq!(adjust_root("قم", "*ت**", '*'), "قوم");
        // No pattern.
        assert_eq!(adjust_root("قم", "", '*'), "قم");
    }

    #[test]
    fn test_most_common() {
        let candidates = ["كتب", "كتبن", "كتب", "كبو", "كتبن", "كتبن"];
        assert_eq!(most_common(&candidates).as_deref(), Some("كتب"));

        let candidates = ["درس", "كتب"];
        assert_eq!(most_common(&candidates).as_deref(), Some("درس"));

        let candidates = ["كتبن", "كتبن", "كت"];
        assert_eq!(most_common(&candidates).as_deref(), Some("كتبن"));

        assert_eq!(most_common::<&str>(&[]), None);
    }

    #[test]
    fn test_extract_root() {
        let (roots, stopwords) = fixture();
        let extractor = RootExtractor::new('*', &roots, &stopwords);

        assert_eq!(extractor.extract_root("كتب", "***"), "كتب");
        assert_eq!(extractor.extract_root("قال", "*ا*"), "قول");
        assert_eq!(extractor.extract_root("كاتب", "*ا**"), "كتب");
        assert_eq!(extractor.extract_root("مكتوب", "***و*"), "مكتب");
        // Two radicals left: restore the weak one.
        assert_eq!(extractor.extract_root("داعي", "*ا*ي"), "دعي");
        // Teh Marbuta drops out, leaving two radicals to adjust.
        assert_eq!(extractor.extract_root("صلة", "***"), "صول");
        // Pattern of the wrong length.
        assert_eq!(extractor.extract_root("كاتب", "*ا*"), "كاتب");
        assert_eq!(extractor.extract_root("", ""), "");
    }

    #[test]
    fn test_choose_root() {
        let (roots, stopwords) = fixture();
        let extractor = RootExtractor::new('*', &roots, &stopwords);

        let candidates = ["كتب", "يكت", "كتب", "كتبن", "كبو"];
        assert_eq!(extractor.choose_root("يكتبون", &candidates), "كتب");

        // Unknown roots still compete when none is in the dictionary.
        let candidates = ["لعب", "لعبن", "لعب"];
        assert_eq!(extractor.choose_root("يلعبون", &candidates), "لعب");

        // Nothing of a valid length.
        let candidates = ["م", "مستكتبون"];
        assert_eq!(extractor.choose_root("م", &candidates), "");

        assert_eq!(extractor.choose_root("كانت", &["كنت"]), "كون");
    }
}
