use serde::{Deserialize, Serialize};

use crate::argument::Argument;
use crate::row::{WordId, WordRow};
use crate::sentence::Sentence;

/// A predicate-marked word and the arguments resolved for it.
///
/// Predicates are created while a sentence is assembled, one for each word
/// whose PRED field is filled. The ordinal records the predicate's
/// first-occurrence position among the sentence's predicates and selects
/// which argument-label column speaks about it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    word: WordId,
    ordinal: usize,
    arguments: Vec<Argument>,
}

impl Predicate {
    pub(crate) fn new(word: WordId, ordinal: usize) -> Self {
        Predicate {
            word,
            ordinal,
            arguments: Vec::new(),
        }
    }

    pub(crate) fn clear_arguments(&mut self) {
        self.arguments.clear();
    }

    pub(crate) fn push_argument(&mut self, argument: Argument) {
        self.arguments.push(argument);
    }

    /// Id of the word governing this predicate.
    pub fn word_id(&self) -> WordId {
        self.word
    }

    /// 0-based position of this predicate among the sentence's predicates.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Resolved arguments in discovery order.
    ///
    /// Empty until [`ArgumentResolver::resolve`] has run over the sentence.
    ///
    /// [`ArgumentResolver::resolve`]: crate::ArgumentResolver::resolve
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// The governing word row, resolved against `sentence`.
    pub fn word<'a, W: WordRow>(&self, sentence: &'a Sentence<W>) -> Option<&'a W> {
        sentence.word(self.word)
    }

    /// Surface form of the governing word.
    pub fn form<'a, W: WordRow>(&self, sentence: &'a Sentence<W>) -> Option<&'a str> {
        self.word(sentence).map(|word| word.form())
    }

    /// Lemma of the governing word.
    pub fn lemma<'a, W: WordRow>(&self, sentence: &'a Sentence<W>) -> Option<&'a str> {
        self.word(sentence).map(|word| word.lemma())
    }

    /// Predicate sense of the governing word, e.g. `sign.02`.
    pub fn sense<'a, W: WordRow>(&self, sentence: &'a Sentence<W>) -> Option<&'a str> {
        self.word(sentence).and_then(|word| word.predicate_sense())
    }
}
