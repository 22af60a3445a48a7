use std::fmt;

use serde::{Deserialize, Serialize};

use crate::predicate::Predicate;
use crate::row::{PLACEHOLDER, WordId, WordRow};
use crate::word::Word2009;

/// An ordered sequence of words together with the predicates found in it.
///
/// The sentence exclusively owns its words and predicates. Words keep their
/// input order and are immutable once pushed; a predicate is appended as a
/// side effect of pushing a predicate-marked word, its ordinal equal to the
/// predicate count before the insertion, so ordinals equal first-occurrence
/// order.
///
/// The serialized form carries the word rows only; deserialization rebuilds
/// the predicate index from the word sequence, and arguments must be
/// resolved again with [`ArgumentResolver`].
///
/// [`ArgumentResolver`]: crate::ArgumentResolver
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    bound(
        serialize = "W: Serialize + Clone",
        deserialize = "W: Deserialize<'de> + WordRow"
    ),
    from = "Vec<W>",
    into = "Vec<W>"
)]
pub struct Sentence<W = Word2009> {
    words: Vec<W>,
    predicates: Vec<Predicate>,
}

impl<W> Sentence<W> {
    /// Creates an empty sentence.
    pub fn new() -> Self {
        Sentence {
            words: Vec::new(),
            predicates: Vec::new(),
        }
    }

    /// The words in input order.
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The predicates in first-occurrence order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Number of predicates.
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    pub(crate) fn words_and_predicates_mut(&mut self) -> (&[W], &mut [Predicate]) {
        (&self.words, &mut self.predicates)
    }
}

impl<W: WordRow> Sentence<W> {
    /// Appends a word.
    ///
    /// When the word is predicate-marked, a [`Predicate`] referencing it is
    /// appended as well, with ordinal equal to the current predicate count.
    pub fn push(&mut self, word: W) {
        if word.predicate_sense().is_some() {
            self.predicates
                .push(Predicate::new(word.id(), self.predicates.len()));
        }
        self.words.push(word);
    }

    /// The word with the given id, if any.
    pub fn word(&self, id: WordId) -> Option<&W> {
        self.words.iter().find(|word| word.id() == id)
    }
}

impl<W> Default for Sentence<W> {
    fn default() -> Self {
        Sentence::new()
    }
}

impl<W: WordRow> From<Vec<W>> for Sentence<W> {
    fn from(words: Vec<W>) -> Self {
        let mut sentence = Sentence::new();
        for word in words {
            sentence.push(word);
        }
        sentence
    }
}

impl<W> From<Sentence<W>> for Vec<W> {
    fn from(sentence: Sentence<W>) -> Self {
        sentence.words
    }
}

impl<W: WordRow + fmt::Display> fmt::Display for Sentence<W> {
    /// Renders a human-readable dump of every word followed by each
    /// predicate with its resolved arguments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            writeln!(f, "WORD:")?;
            writeln!(f, "{word}")?;
        }

        for predicate in &self.predicates {
            writeln!(f, "Pred:\t{}", predicate.form(self).unwrap_or(PLACEHOLDER))?;
            writeln!(f, "Arguments:")?;
            for argument in predicate.arguments() {
                writeln!(
                    f,
                    "\t{}:\t{}{}",
                    argument.label(),
                    argument.surface_form(self),
                    if argument.is_complete() {
                        ""
                    } else {
                        " (incomplete)"
                    }
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: WordId, form: &str, pred: &str) -> Word2009 {
        let id = id.to_string();
        Word2009::from_columns([
            id.as_str(),
            form,
            form,
            form,
            "NN",
            "NN",
            "_",
            "_",
            "0",
            "0",
            "ROOT",
            "ROOT",
            "_",
            pred,
        ])
        .unwrap()
    }

    #[test]
    fn predicates_are_collected_in_first_occurrence_order() {
        let mut sentence = Sentence::new();
        sentence.push(word(1, "dogs", "_"));
        sentence.push(word(2, "chase", "chase.01"));
        sentence.push(word(3, "and", "_"));
        sentence.push(word(4, "catch", "catch.01"));

        assert_eq!(sentence.len(), 4);
        assert_eq!(sentence.predicate_count(), 2);

        let ordinals: Vec<(WordId, usize)> = sentence
            .predicates()
            .iter()
            .map(|predicate| (predicate.word_id(), predicate.ordinal()))
            .collect();
        assert_eq!(ordinals, vec![(2, 0), (4, 1)]);
    }

    #[test]
    fn word_lookup_is_by_id_not_position() {
        let mut sentence = Sentence::new();
        sentence.push(word(10, "far", "_"));
        sentence.push(word(20, "away", "_"));

        assert_eq!(sentence.word(20).map(|word| word.form()), Some("away"));
        assert_eq!(sentence.word(2), None);
    }

    #[test]
    fn rebuilding_from_words_restores_the_predicate_index() {
        let mut sentence = Sentence::new();
        sentence.push(word(1, "it", "_"));
        sentence.push(word(2, "rains", "rain.01"));

        let rebuilt = Sentence::from(Vec::from(sentence.clone()));
        assert_eq!(sentence, rebuilt);
    }
}
