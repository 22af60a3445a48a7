use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::row::{WordId, WordRow};
use crate::sentence::Sentence;

/// One semantic argument of a predicate: a role label together with the
/// member words that realize it.
///
/// Members are held as word ids, never as copies of the rows themselves;
/// they are resolved against the owning [`Sentence`] on access. The member
/// set is ordered by ascending id regardless of discovery order, so the
/// argument's surface text reconstructs left to right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    label: String,
    predicate_word: WordId,
    members: BTreeSet<WordId>,
    complete: bool,
}

impl Argument {
    pub(crate) fn new(predicate_word: WordId, label: impl Into<String>) -> Self {
        Argument {
            label: label.into(),
            predicate_word,
            members: BTreeSet::new(),
            complete: true,
        }
    }

    pub(crate) fn insert(&mut self, id: WordId) {
        self.members.insert(id);
    }

    pub(crate) fn mark_incomplete(&mut self) {
        self.complete = false;
    }

    /// The role label, e.g. `A0` or `AM-TMP`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Id of the word governing the predicate this argument belongs to.
    pub fn predicate_word_id(&self) -> WordId {
        self.predicate_word
    }

    /// Member word ids in ascending order.
    pub fn word_ids(&self) -> impl Iterator<Item = WordId> + '_ {
        self.members.iter().copied()
    }

    /// Number of member words.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the argument has no members yet.
    ///
    /// A resolved argument always contains at least its labeled head word.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether subtree collection ran to completion.
    ///
    /// Returns `false` when the traversal guard met an already-collected
    /// word, which happens only on malformed dependency structure (a cycle
    /// or a shared dependent). The membership is still bounded and usable,
    /// but may not cover the full subtree.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Member words in ascending id order, resolved against `sentence`.
    pub fn words<'a, W: WordRow>(
        &'a self,
        sentence: &'a Sentence<W>,
    ) -> impl Iterator<Item = &'a W> + 'a {
        self.members.iter().filter_map(|id| sentence.word(*id))
    }

    /// The argument's surface text: member forms joined left to right.
    pub fn surface_form<W: WordRow>(&self, sentence: &Sentence<W>) -> String {
        self.words(sentence).map(|word| word.form()).join(" ")
    }

    /// Surface form of the governing predicate's word.
    pub fn predicate_form<'a, W: WordRow>(&self, sentence: &'a Sentence<W>) -> Option<&'a str> {
        sentence.word(self.predicate_word).map(|word| word.form())
    }

    /// Lemma of the governing predicate's word.
    pub fn predicate_lemma<'a, W: WordRow>(&self, sentence: &'a Sentence<W>) -> Option<&'a str> {
        sentence.word(self.predicate_word).map(|word| word.lemma())
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]{}",
            self.label,
            self.members.iter().join(", "),
            if self.complete { "" } else { " (incomplete)" }
        )
    }
}
