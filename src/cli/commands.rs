//! Command implementations for the arabic-stemmer CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::arabic::ArabicLightStemmer;
use crate::arabic::config::StemmerConfig;
use crate::arabic::dictionary::RootList;
use crate::arabic::stamp::VerbStampList;
use crate::arabic::stopwords::StopwordDictionary;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, StemmerError};

/// Execute a CLI command.
pub fn execute_command(args: StemmerArgs) -> Result<()> {
    let stemmer = build_stemmer(&args)?;

    match &args.command {
        Command::Stem(words_args) => stem_words(&stemmer, words_args, &args),
        Command::Root(words_args) => root_words(&stemmer, words_args, &args),
        Command::Analyze(words_args) => analyze_words(&stemmer, words_args, &args),
        Command::Segment(words_args) => segment_words(&stemmer, words_args, &args),
    }
}

/// Build a stemmer from the configuration and resource options.
pub fn build_stemmer(args: &StemmerArgs) -> Result<ArabicLightStemmer> {
    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            StemmerConfig::from_json_file(path)?
        }
        None => StemmerConfig::default(),
    };
    let mut stemmer = ArabicLightStemmer::with_config(config);

    if let Some(path) = &args.stopwords {
        let stopwords = StopwordDictionary::from_path(path)?;
        log::info!("Loaded {} stopwords from {}", stopwords.len(), path.display());
        stemmer.set_stopwords(Arc::new(stopwords));
    }
    if let Some(path) = &args.verbs {
        let verbs = VerbStampList::from_path(path)?;
        log::info!("Loaded {} verb stamps from {}", verbs.len(), path.display());
        stemmer.set_verb_stamps(Arc::new(verbs));
    }
    if let Some(path) = &args.roots {
        let roots = RootList::from_path(path)?;
        log::info!("Loaded {} roots from {}", roots.len(), path.display());
        stemmer.set_root_list(roots.iter().map(str::to_string).collect());
    }

    Ok(stemmer)
}

/// Collect the words given on the command line and in the input file.
pub fn read_words(args: &WordsArgs) -> Result<Vec<String>> {
    let mut words = args.words.clone();

    if let Some(path) = &args.input {
        words.extend(read_word_file(path)?);
    }

    if words.is_empty() {
        return Err(StemmerError::invalid_argument(
            "no words given, pass them as arguments or with --input",
        ));
    }
    Ok(words)
}

fn read_word_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read input file {}", path.display()))?;
    let words: Vec<String> = content.split_whitespace().map(str::to_string).collect();
    log::debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

fn stem_words(
    stemmer: &ArabicLightStemmer,
    words_args: &WordsArgs,
    args: &StemmerArgs,
) -> Result<()> {
    let words = read_words(words_args)?;
    let results: Vec<StemResult> = words
        .iter()
        .zip(stemmer.stem_all(&words))
        .map(|(word, stem)| StemResult {
            word: word.clone(),
            stem,
        })
        .collect();

    output_result(&results, args)
}

fn root_words(
    stemmer: &ArabicLightStemmer,
    words_args: &WordsArgs,
    args: &StemmerArgs,
) -> Result<()> {
    let words = read_words(words_args)?;
    let results: Vec<RootResult> = words
        .iter()
        .zip(stemmer.root_all(&words))
        .map(|(word, root)| RootResult {
            word: word.clone(),
            root,
        })
        .collect();

    output_result(&results, args)
}

fn analyze_words(
    stemmer: &ArabicLightStemmer,
    words_args: &WordsArgs,
    args: &StemmerArgs,
) -> Result<()> {
    let words = read_words(words_args)?;
    let results: Vec<_> = words.iter().map(|word| stemmer.analyze(word)).collect();

    output_result(&results, args)
}

fn segment_words(
    stemmer: &ArabicLightStemmer,
    words_args: &WordsArgs,
    args: &StemmerArgs,
) -> Result<()> {
    let words = read_words(words_args)?;
    let results: Vec<SegmentationResult> = words
        .iter()
        .map(|word| SegmentationResult {
            word: word.clone(),
            candidates: stemmer.affix_list(word),
        })
        .collect();

    output_result(&results, args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn parse(argv: &[&str]) -> StemmerArgs {
        StemmerArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_read_words_from_args_and_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "الكاتب يكتبون\n\nمدرسة").unwrap();

        let args = WordsArgs {
            words: vec!["كتب".to_string()],
            input: Some(file.path().to_path_buf()),
        };
        let words = read_words(&args).unwrap();

        assert_eq!(words, vec!["كتب", "الكاتب", "يكتبون", "مدرسة"]);
    }

    #[test]
    fn test_read_words_requires_input() {
        let args = WordsArgs {
            words: Vec::new(),
            input: None,
        };
        assert!(matches!(
            read_words(&args),
            Err(StemmerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_input_file() {
        let args = WordsArgs {
            words: Vec::new(),
            input: Some("/nonexistent/words.txt".into()),
        };
        let err = read_words(&args).unwrap_err();
        assert!(err.to_string().contains("cannot read input file"));
    }

    #[test]
    fn test_build_stemmer_with_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r##"{{"joker": "#", "min_stem_length": 3}}"##).unwrap();

        let path = file.path().to_str().unwrap();
        let stemmer = build_stemmer(&parse(&["arabic-stemmer", "--config", path, "stem", "x"]))
            .unwrap();

        assert_eq!(stemmer.joker(), '#');
        assert_eq!(stemmer.min_stem_length(), 3);
        assert_eq!(stemmer.max_prefix_length(), 5);
    }

    #[test]
    fn test_build_stemmer_with_tables() {
        let mut stopwords = NamedTempFile::new().unwrap();
        write!(stopwords, r#"{{"الكاتب": {{"stem": "كاتب", "root": "كتب"}}}}"#).unwrap();
        let mut roots = NamedTempFile::new().unwrap();
        writeln!(roots, "# roots\nكتب\nدرس").unwrap();

        let stemmer = build_stemmer(&parse(&[
            "arabic-stemmer",
            "--stopwords",
            stopwords.path().to_str().unwrap(),
            "--roots",
            roots.path().to_str().unwrap(),
            "stem",
            "x",
        ]))
        .unwrap();

        assert_eq!(stemmer.root_list(), ["درس", "كتب"]);
        assert!(stemmer.analyze("الكاتب").stopword);
        // The replacement table no longer lists "في".
        assert!(!stemmer.analyze("في").stopword);
    }

    #[test]
    fn test_build_stemmer_bad_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let path = file.path().to_str().unwrap();
        let result = build_stemmer(&parse(&["arabic-stemmer", "--config", path, "stem", "x"]));
        assert!(matches!(result, Err(StemmerError::Json(_))));
    }
}
