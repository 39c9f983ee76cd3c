//! Candidate segmentation.
//!
//! A word is split into `prefix | stem | suffix` at every pair of boundaries
//! the affix tries admit. The result is grouped by prefix boundary.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::arabic::trie::AffixTrie;

/// Stems shorter than this are never produced, whatever the configuration.
pub const MIN_SEGMENT_STEM: usize = 2;

/// A `(left, right)` split of a word into prefix, stem and suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Segment {
    pub left: usize,
    pub right: usize,
}

impl Segment {
    pub fn new(left: usize, right: usize) -> Self {
        Segment { left, right }
    }

    pub fn prefix<'w>(&self, word: &'w [char]) -> &'w [char] {
        &word[..self.left]
    }

    pub fn stem<'w>(&self, word: &'w [char]) -> &'w [char] {
        &word[self.left..self.right]
    }

    pub fn suffix<'w>(&self, word: &'w [char]) -> &'w [char] {
        &word[self.right..]
    }

    pub fn stem_len(&self) -> usize {
        self.right - self.left
    }
}

/// Segments keyed by left boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentSet {
    by_left: BTreeMap<usize, BTreeSet<usize>>,
}

impl SegmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, segment: Segment) -> bool {
        self.by_left
            .entry(segment.left)
            .or_default()
            .insert(segment.right)
    }

    pub fn contains(&self, segment: &Segment) -> bool {
        self.by_left
            .get(&segment.left)
            .is_some_and(|rights| rights.contains(&segment.right))
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.by_left.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_left.is_empty()
    }

    /// Segments in `(left, right)` order.
    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        self.by_left
            .iter()
            .flat_map(|(&left, rights)| rights.iter().map(move |&right| Segment::new(left, right)))
    }

    /// The segment with the longest prefix, and among those the longest suffix.
    pub fn best(&self) -> Option<Segment> {
        let (&left, rights) = self.by_left.iter().next_back()?;
        let &right = rights.first()?;
        Some(Segment::new(left, right))
    }

    /// Keep only the segments accepted by `keep`.
    pub fn filter(&self, mut keep: impl FnMut(Segment) -> bool) -> SegmentSet {
        self.iter().filter(|segment| keep(*segment)).collect()
    }
}

impl FromIterator<Segment> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut set = SegmentSet::new();
        for segment in iter {
            set.insert(segment);
        }
        set
    }
}

/// Enumerates every admissible segment of a word.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    prefixes: &'a AffixTrie,
    suffixes: &'a AffixTrie,
    min_stem_length: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(prefixes: &'a AffixTrie, suffixes: &'a AffixTrie, min_stem_length: usize) -> Self {
        Segmenter {
            prefixes,
            suffixes,
            min_stem_length: min_stem_length.max(MIN_SEGMENT_STEM),
        }
    }

    /// Cross prefix and suffix boundaries, keeping stems of at least the
    /// minimum length.
    pub fn segment(&self, word: &[char]) -> SegmentSet {
        let lefts = self.prefixes.lookup_prefix_boundaries(word);
        let mut rights = self.suffixes.lookup_suffix_boundaries(word);
        rights.insert(word.len());

        let mut segments = SegmentSet::new();
        for &left in &lefts {
            for &right in &rights {
                if right >= left + self.min_stem_length {
                    segments.insert(Segment::new(left, right));
                }
            }
        }

        log::trace!(
            "lefts {:?}, rights {:?}, {} segments",
            lefts,
            rights,
            segments.len()
        );
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_segment_cross_product() {
        let prefixes = AffixTrie::prefixes(["", "ي"]);
        let suffixes = AffixTrie::suffixes(["", "ن", "ون"]);
        let segmenter = Segmenter::new(&prefixes, &suffixes, 2);

        let segments = segmenter.segment(&chars("يكتبون"));
        let all: Vec<_> = segments.iter().map(|s| (s.left, s.right)).collect();

        assert_eq!(all, vec![(0, 4), (0, 5), (0, 6), (1, 4), (1, 5), (1, 6)]);
        assert_eq!(segments.best(), Some(Segment::new(1, 4)));
    }

    #[test]
    fn test_min_stem_length_filter() {
        let prefixes = AffixTrie::prefixes(["", "ال"]);
        let suffixes = AffixTrie::suffixes(["", "ة"]);

        let segments = Segmenter::new(&prefixes, &suffixes, 3).segment(&chars("الكرة"));
        assert!(segments.contains(&Segment::new(0, 4)));
        assert!(!segments.contains(&Segment::new(2, 4)));
        assert!(segments.contains(&Segment::new(2, 5)));

        // Anything below two is raised to two.
        let segments = Segmenter::new(&prefixes, &suffixes, 0).segment(&chars("الكرة"));
        assert!(segments.iter().all(|s| s.right >= s.left + 2));
    }

    #[test]
    fn test_best_uses_min_right_of_max_left() {
        let segments: SegmentSet = [
            Segment::new(0, 3),
            Segment::new(2, 6),
            Segment::new(2, 5),
            Segment::new(1, 4),
        ]
        .into_iter()
        .collect();

        assert_eq!(segments.len(), 4);
        assert_eq!(segments.best(), Some(Segment::new(2, 5)));
        assert_eq!(SegmentSet::new().best(), None);
    }

    #[test]
    fn test_segment_slices() {
        let word = chars("والكتاب");
        let segment = Segment::new(3, 7);

        assert_eq!(segment.prefix(&word).iter().collect::<String>(), "وال");
        assert_eq!(segment.stem(&word).iter().collect::<String>(), "كتاب");
        assert!(segment.suffix(&word).is_empty());
        assert_eq!(segment.stem_len(), 4);
    }

    #[test]
    fn test_filter_drops_empty_groups() {
        let segments: SegmentSet = [Segment::new(0, 3), Segment::new(1, 3)]
            .into_iter()
            .collect();

        let kept = segments.filter(|s| s.left == 0);
        assert_eq!(kept.best(), Some(Segment::new(0, 3)));
        assert!(segments.filter(|_| false).is_empty());
    }
}
