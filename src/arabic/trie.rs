//! Character tries over affix lists.
//!
//! A prefix trie is indexed front-to-back and a suffix trie back-to-front, so
//! both are walked from the anchored end of a word. A lookup reports every
//! boundary where a listed affix ends, not only the longest match.

use std::collections::BTreeSet;

use ahash::AHashMap;

/// A node in an affix trie.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children keyed by the next character in walk order.
    children: AHashMap<char, TrieNode>,
    /// The affix that ends at this node, if any.
    terminal: Option<String>,
}

impl TrieNode {
    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Check whether a listed affix ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// The affix ending at this node.
    pub fn affix(&self) -> Option<&str> {
        self.terminal.as_deref()
    }
}

/// Which end of a word the trie is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Prefixes, walked from the first character.
    Start,
    /// Suffixes, walked from the last character.
    End,
}

/// A trie built once from an affix list and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AffixTrie {
    root: TrieNode,
    anchor: Anchor,
    len: usize,
}

impl AffixTrie {
    /// Build a trie of prefixes.
    pub fn prefixes<I, S>(affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(Anchor::Start, affixes)
    }

    /// Build a trie of suffixes.
    pub fn suffixes<I, S>(affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(Anchor::End, affixes)
    }

    /// Build a fresh trie with the same anchor from a new affix list.
    pub fn rebuild<I, S>(&self, affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(self.anchor, affixes)
    }

    fn build<I, S>(anchor: Anchor, affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = TrieNode::default();
        let mut len = 0;

        for affix in affixes {
            let affix = affix.as_ref();
            let chars: Vec<char> = match anchor {
                Anchor::Start => affix.chars().collect(),
                Anchor::End => affix.chars().rev().collect(),
            };

            let mut node = &mut root;
            for c in chars {
                node = node.children.entry(c).or_default();
            }
            if node.terminal.is_none() {
                len += 1;
                node.terminal = Some(affix.to_string());
            }
        }

        AffixTrie { root, anchor, len }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Number of distinct affixes in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether an affix is in the list this trie was built from.
    pub fn contains(&self, affix: &str) -> bool {
        let mut node = &self.root;
        let walk: Box<dyn Iterator<Item = char>> = match self.anchor {
            Anchor::Start => Box::new(affix.chars()),
            Anchor::End => Box::new(affix.chars().rev()),
        };
        for c in walk {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_terminal()
    }

    /// Every admissible boundary for this trie's anchor.
    pub fn lookup(&self, word: &[char]) -> BTreeSet<usize> {
        match self.anchor {
            Anchor::Start => self.lookup_prefix_boundaries(word),
            Anchor::End => self.lookup_suffix_boundaries(word),
        }
    }

    /// Offsets `i` such that `word[..i]` is a listed prefix.
    ///
    /// Offset 0 is always included. A prefix covering the whole word is not
    /// reported.
    pub fn lookup_prefix_boundaries(&self, word: &[char]) -> BTreeSet<usize> {
        let mut lefts = BTreeSet::from([0]);
        let mut node = &self.root;

        for (i, c) in word.iter().enumerate() {
            if node.is_terminal() {
                lefts.insert(i);
            }
            match node.child(*c) {
                Some(next) => node = next,
                None => return lefts,
            }
        }

        lefts
    }

    /// Offsets `i` such that `word[i..]` is a listed suffix.
    ///
    /// A suffix covering the whole word is not reported.
    pub fn lookup_suffix_boundaries(&self, word: &[char]) -> BTreeSet<usize> {
        let mut rights = BTreeSet::new();
        let mut node = &self.root;

        for (i, c) in word.iter().enumerate().rev() {
            if node.is_terminal() {
                rights.insert(i + 1);
            }
            match node.child(*c) {
                Some(next) => node = next,
                None => return rights,
            }
        }

        rights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_prefix_boundaries_report_every_match() {
        let trie = AffixTrie::prefixes(["", "و", "وال", "ال"]);
        let lefts = trie.lookup_prefix_boundaries(&chars("والكتاب"));

        assert_eq!(lefts.into_iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn test_prefix_walk_stops_without_backtracking() {
        // "وب" is not a prefix of "والكتاب", and "ال" sits on a sibling branch.
        let trie = AffixTrie::prefixes(["وب", "ال"]);
        let lefts = trie.lookup_prefix_boundaries(&chars("والكتاب"));

        assert_eq!(lefts.into_iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_suffix_boundaries() {
        let trie = AffixTrie::suffixes(["", "ن", "ون", "ه"]);
        let rights = trie.lookup_suffix_boundaries(&chars("يكتبون"));

        assert_eq!(rights.into_iter().collect::<Vec<_>>(), vec![4, 5, 6]);
    }

    #[test]
    fn test_whole_word_affix_not_reported() {
        let trie = AffixTrie::prefixes(["ال"]);
        let lefts = trie.lookup_prefix_boundaries(&chars("ال"));
        assert_eq!(lefts.into_iter().collect::<Vec<_>>(), vec![0]);

        let trie = AffixTrie::suffixes(["ها"]);
        let rights = trie.lookup_suffix_boundaries(&chars("ها"));
        assert!(rights.is_empty());
    }

    #[test]
    fn test_contains_and_len() {
        let trie = AffixTrie::suffixes(["ون", "ين", "ون"]);

        assert_eq!(trie.len(), 2);
        assert!(trie.contains("ون"));
        assert!(!trie.contains("و"));
        assert!(!trie.contains(""));
        assert_eq!(trie.anchor(), Anchor::End);
    }

    #[test]
    fn test_rebuild_keeps_anchor() {
        let trie = AffixTrie::prefixes(["ال"]);
        let rebuilt = trie.rebuild(["ب", "بال"]);

        assert_eq!(rebuilt.anchor(), Anchor::Start);
        assert!(rebuilt.contains("بال"));
        assert!(!rebuilt.contains("ال"));
        assert!(trie.contains("ال"));
    }

    #[test]
    fn test_empty_trie() {
        let trie = AffixTrie::prefixes(Vec::<String>::new());
        assert!(trie.is_empty());
        assert_eq!(
            trie.lookup(&chars("كتب")).into_iter().collect::<Vec<_>>(),
            vec![0]
        );
    }
}
