//! Starred patterns.
//!
//! A starred pattern masks every letter that cannot be grammatical filler
//! with the joker. On a whole word the mask bounds the region where the stem
//! can start and end. On a stem it marks the positions of the radicals.

use serde::Serialize;

use crate::arabic::config::StemmerConfig;
use crate::arabic::letters::{DAD, DAL, LetterClass, TAH, TEH, TEH_MARBUTA, ZAIN};
use crate::arabic::trie::AffixTrie;

/// Result of the window estimate over a whole word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarWindow {
    /// Prefix, masked stem and suffix.
    pub starword: String,
    /// End of the estimated prefix.
    pub left: usize,
    /// Start of the estimated suffix.
    pub right: usize,
}

/// Masks words and stems using the configured letter classes.
#[derive(Debug, Clone, Copy)]
pub struct StarTransform<'a> {
    config: &'a StemmerConfig,
    prefixes: &'a AffixTrie,
    suffixes: &'a AffixTrie,
}

fn mask_with(class: &LetterClass, c: char, joker: char) -> char {
    if class.contains(c) { c } else { joker }
}

impl<'a> StarTransform<'a> {
    pub fn new(
        config: &'a StemmerConfig,
        prefixes: &'a AffixTrie,
        suffixes: &'a AffixTrie,
    ) -> Self {
        StarTransform {
            config,
            prefixes,
            suffixes,
        }
    }

    fn mask_stem_zone<'s>(&'s self, stem: &'s [char]) -> impl Iterator<Item = char> + 's {
        let infix = &self.config.infix_letters;
        let joker = self.config.joker;
        stem.iter().map(move |&c| {
            if infix.is_empty() {
                joker
            } else {
                mask_with(infix, c, joker)
            }
        })
    }

    /// Estimate the prefix and suffix boundaries of a normalized word.
    pub fn estimate_window(&self, word: &[char]) -> StarWindow {
        let config = self.config;
        let joker = config.joker;
        let len = word.len();

        let mut masked: Vec<char> = word
            .iter()
            .map(|&c| {
                if config.prefix_letters.contains(c) || config.suffix_letters.contains(c) {
                    c
                } else {
                    joker
                }
            })
            .collect();

        let first = masked.iter().position(|&c| c == joker);
        let last = masked.iter().rposition(|&c| c == joker);
        if let (Some(first), Some(last)) = (first, last) {
            let left = first.min(config.max_prefix_length.saturating_sub(1));
            let right = (last + 1).max(len.saturating_sub(config.max_suffix_length));

            for (i, slot) in masked.iter_mut().enumerate() {
                let c = word[i];
                if i < left {
                    *slot = mask_with(&config.prefix_letters, c, joker);
                } else if i >= right {
                    *slot = mask_with(&config.suffix_letters, c, joker);
                } else if !config.infix_letters.is_empty() {
                    *slot = mask_with(&config.infix_letters, c, joker);
                }
            }
        }

        let first = masked.iter().position(|&c| c == joker);
        let last = masked.iter().rposition(|&c| c == joker);
        let left = first.unwrap_or_else(|| config.max_prefix_length.min(len.saturating_sub(2)));

        let mut prefix = &word[..left];
        while !prefix.is_empty() && !self.prefixes.contains(&prefix.iter().collect::<String>()) {
            prefix = &prefix[..prefix.len() - 1];
        }
        // Without a joker the suffix window starts after the trimmed prefix.
        let suffix_start = match last {
            Some(last) => last + 1,
            None => prefix.len().max(len.saturating_sub(config.max_suffix_length)),
        };
        let mut suffix = &word[suffix_start..];
        while !suffix.is_empty() && !self.suffixes.contains(&suffix.iter().collect::<String>()) {
            suffix = &suffix[1..];
        }

        let left = prefix.len();
        let right = len - suffix.len();

        let starword = prefix
            .iter()
            .copied()
            .chain(self.mask_stem_zone(&word[left..right]))
            .chain(suffix.iter().copied())
            .collect();

        StarWindow {
            starword,
            left,
            right,
        }
    }

    /// Mask a stem so that only pattern letters remain visible.
    ///
    /// Teh, Tah and Dal are pattern letters only in a few positions of
    /// four-letter stems (the `افتعل` family and its assimilated forms);
    /// everywhere else they are radicals.
    pub fn star_stem(&self, stem: &[char]) -> String {
        let joker = self.config.joker;
        let infix = &self.config.infix_letters;

        let mut masked: Vec<char> = stem
            .iter()
            .map(|&c| {
                if !infix.is_empty() && (c == TEH_MARBUTA || infix.contains(c)) {
                    c
                } else {
                    joker
                }
            })
            .collect();

        let core_len = stem.iter().filter(|&&c| c != TEH_MARBUTA).count();
        let starts_dad_tah = stem.starts_with(&[DAD, TAH]);
        let starts_zain_dal = stem.starts_with(&[ZAIN, DAL]);

        for (i, slot) in masked.iter_mut().enumerate() {
            let hide = match stem[i] {
                TEH | TAH | DAL if core_len != 4 => true,
                TEH => i >= 2,
                TAH => !starts_dad_tah || i >= 2,
                DAL => !starts_zain_dal || i >= 2,
                _ => false,
            };
            if hide {
                *slot = joker;
            }
        }

        masked.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn with_transform<R>(config: &StemmerConfig, f: impl FnOnce(StarTransform<'_>) -> R) -> R {
        let prefixes = AffixTrie::prefixes(&config.prefix_list);
        let suffixes = AffixTrie::suffixes(&config.suffix_list);
        f(StarTransform::new(config, &prefixes, &suffixes))
    }

    #[test]
    fn test_star_stem_masks_radicals() {
        let config = StemmerConfig::default();
        with_transform(&config, |star| {
            assert_eq!(star.star_stem(&chars("كاتب")), "*ا**");
            assert_eq!(star.star_stem(&chars("مكتوب")), "***و*");
            assert_eq!(star.star_stem(&chars("كتب")), "***");
        });
    }

    #[test]
    fn test_star_stem_teh_group() {
        let config = StemmerConfig::default();
        with_transform(&config, |star| {
            // Teh of a four-letter stem is a pattern letter only up front.
            assert_eq!(star.star_stem(&chars("كتبو")), "*ت*و");
            assert_eq!(star.star_stem(&chars("تكلم")), "ت***");
            // Tah is kept only after Dad.
            assert_eq!(star.star_stem(&chars("ضطرب")), "*ط**");
            assert_eq!(star.star_stem(&chars("طلبو")), "***و");
            // Dal is kept only after Zain.
            assert_eq!(star.star_stem(&chars("زدهر")), "*د**");
            assert_eq!(star.star_stem(&chars("مدرسة")), "****ة");
            // Outside four-letter stems all three are radicals.
            assert_eq!(star.star_stem(&chars("تعلمت")), "*****");
        });
    }

    #[test]
    fn test_star_stem_empty_infix_masks_everything() {
        let config = StemmerConfig {
            infix_letters: LetterClass::new(""),
            ..StemmerConfig::default()
        };
        with_transform(&config, |star| {
            assert_eq!(star.star_stem(&chars("كاتبة")), "*****");
        });
    }

    #[test]
    fn test_estimate_window() {
        let config = StemmerConfig::default();
        with_transform(&config, |star| {
            let window = star.estimate_window(&chars("الكاتب"));
            assert_eq!(window.left, 2);
            assert_eq!(window.right, 6);
            assert_eq!(window.starword, "ال*ات*");

            let window = star.estimate_window(&chars("يكتبون"));
            assert_eq!(window.left, 1);
            assert_eq!(window.right, 4);
            assert_eq!(window.starword, "ي*ت*ون");
        });
    }

    #[test]
    fn test_estimate_window_with_jokers() {
        let config = StemmerConfig::default();
        with_transform(&config, |star| {
            let window = star.estimate_window(&chars("مدرستهم"));
            assert_eq!(window.left, 0);
            assert_eq!(window.right, 4);
            assert_eq!(window.starword, "*د**تهم");
        });
    }

    #[test]
    fn test_estimate_window_without_jokers() {
        // Every letter of "وليت" is a possible affix letter.
        let config = StemmerConfig::default();
        with_transform(&config, |star| {
            let window = star.estimate_window(&chars("وليت"));
            assert!(window.left <= window.right);
            assert!(window.right <= 4);
            assert_eq!(window.starword.chars().count(), 4);
        });
    }

    #[test]
    fn test_estimate_window_suffix_follows_trimmed_prefix() {
        let config = StemmerConfig {
            prefix_list: vec!["".to_string(), "و".to_string()],
            suffix_list: ["", "ت", "يت", "ليت"].iter().map(|s| s.to_string()).collect(),
            ..StemmerConfig::default()
        };
        with_transform(&config, |star| {
            // "ول" is trimmed to "و", so the suffix window opens at 1, not 2.
            let window = star.estimate_window(&chars("وليت"));
            assert_eq!((window.left, window.right), (1, 1));
            assert_eq!(window.starword, "وليت");
        });
    }

    #[test]
    fn test_estimate_window_empty_word() {
        let config = StemmerConfig::default();
        with_transform(&config, |star| {
            let window = star.estimate_window(&[]);
            assert_eq!(window.starword, "");
            assert_eq!((window.left, window.right), (0, 0));
        });
    }
}
