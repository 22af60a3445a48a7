/// Ordinal identifier of a word within its sentence.
///
/// The wire format numbers words from 1 in line order. Ids are parsed once
/// when a row is constructed so that head-pointer matching and member
/// ordering compare integers, never re-parsed column text.
pub type WordId = u32;

/// The value marking an absent field in the tabular format.
pub const PLACEHOLDER: &str = "_";

/// Capability interface over one decoded word row.
///
/// A row exposes the fixed set of semantic fields that sentence assembly and
/// argument resolution consume, independent of the concrete column schema
/// that carried them. One implementation exists per supported schema
/// version; this crate ships [`Word2009`] for CoNLL-2009.
///
/// [`Word2009`]: crate::Word2009
pub trait WordRow {
    /// Ordinal of this word within its sentence.
    fn id(&self) -> WordId;

    /// Surface form of the word.
    fn form(&self) -> &str;

    /// Canonical (lemmatized) form of the word.
    fn lemma(&self) -> &str;

    /// Part-of-speech tag.
    fn pos(&self) -> &str;

    /// Predicted syntactic governor of this word, if any.
    ///
    /// Argument subtree collection follows this pointer, not the gold head.
    fn predicted_head(&self) -> Option<WordId>;

    /// The predicate sense carried by this word, or `None` when the word is
    /// not predicate-marked.
    fn predicate_sense(&self) -> Option<&str>;

    /// Role label this word carries with respect to the sentence's `slot`-th
    /// predicate, or `None` when the slot is out of schema range or holds
    /// the placeholder.
    fn argument_label(&self, slot: usize) -> Option<&str>;
}

/// Whether a field value is the format placeholder or blank.
pub(crate) fn is_placeholder(value: &str) -> bool {
    value == PLACEHOLDER || value.trim().is_empty()
}
