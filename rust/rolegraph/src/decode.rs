//! Line and column decoding of the CoNLL-2009 wire format.

use std::collections::HashSet;
use std::str::FromStr;

use tracing::debug;

use crate::error::RolegraphError;
use crate::row::WordRow;
use crate::sentence::Sentence;
use crate::word::Word2009;

/// Decodes a block of CoNLL-2009 text into a [`Sentence`].
///
/// One non-blank line per word, columns separated by tabs. Rows shorter
/// than the schema are right-padded with the placeholder and columns beyond
/// the schema width are ignored, so uneven input is tolerated by design.
/// Blank lines are skipped. Word ids must be numeric and unique within the
/// sentence; empty input yields an empty sentence.
pub fn decode(input: &str) -> Result<Sentence, RolegraphError> {
    let mut sentence = Sentence::new();
    let mut seen = HashSet::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let word: Word2009 = line.parse()?;
        if !seen.insert(word.id()) {
            return Err(RolegraphError::DuplicateWordId(word.id()));
        }
        sentence.push(word);
    }

    debug!(
        words = sentence.len(),
        predicates = sentence.predicate_count(),
        "decoded sentence"
    );

    Ok(sentence)
}

impl FromStr for Sentence {
    type Err = RolegraphError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        decode(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_an_empty_sentence() -> anyhow::Result<()> {
        let sentence = decode("")?;
        assert!(sentence.is_empty());
        assert_eq!(sentence.predicate_count(), 0);

        Ok(())
    }

    #[test]
    fn blank_lines_are_skipped() -> anyhow::Result<()> {
        let sentence = decode("1\tOne\tone\n\n   \n2\tTwo\ttwo\n")?;
        assert_eq!(sentence.len(), 2);

        Ok(())
    }

    #[test]
    fn short_rows_decode_with_placeholder_padding() -> anyhow::Result<()> {
        let sentence = decode("1\tYes")?;
        let word = &sentence.words()[0];

        assert_eq!(word.form(), "Yes");
        assert_eq!(word.lemma(), "_");
        assert_eq!(word.pred(), "_");

        Ok(())
    }

    #[test]
    fn duplicate_word_ids_are_rejected() {
        let result = decode("1\tOne\tone\n1\tTwo\ttwo");
        assert!(matches!(result, Err(RolegraphError::DuplicateWordId(1))));
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        let result = decode("first\tOne\tone");
        assert!(matches!(result, Err(RolegraphError::InvalidWordId(_))));
    }
}
