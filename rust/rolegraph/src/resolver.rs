//! Predicate→argument resolution over a decoded sentence.
//!
//! For every predicate of a sentence, the resolver scans the words in
//! sentence order for role labels in the predicate's argument-label slot.
//! Each labeled word opens an [`Argument`] and contributes its whole
//! dependency subtree: the labeled head plus every word transitively
//! hanging off it through predicted head pointers.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::argument::Argument;
use crate::row::{WordId, WordRow};
use crate::sentence::Sentence;
use crate::word::ARG_COLUMNS;

/// How many of the APRED columns the resolver may address.
///
/// The reference behavior reads the argument-label columns as a slice that
/// stops one column short of the schema, leaving 15 usable slots; whether
/// that narrowing is intentional is unresolved. Both readings are
/// supported and neither is silently corrected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotLimit {
    /// The 15-slot slice of the reference behavior. Default.
    #[default]
    Literal,
    /// All 16 APRED columns the schema reserves.
    Full,
}

impl SlotLimit {
    /// Number of usable argument-label slots under this policy.
    pub fn usable_slots(self) -> usize {
        match self {
            SlotLimit::Literal => ARG_COLUMNS - 1,
            SlotLimit::Full => ARG_COLUMNS,
        }
    }
}

/// Populates each predicate of a [`Sentence`] with its [`Argument`]s.
///
/// Resolution clears previously resolved arguments before populating, so
/// repeated runs over one sentence are idempotent.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArgumentResolver {
    slots: SlotLimit,
}

impl ArgumentResolver {
    /// A resolver with the default [`SlotLimit::Literal`] policy.
    pub fn new() -> Self {
        ArgumentResolver::default()
    }

    /// A resolver addressing argument-label slots under the given policy.
    pub fn with_slot_limit(slots: SlotLimit) -> Self {
        ArgumentResolver { slots }
    }

    /// Resolves the arguments of every predicate in `sentence`.
    ///
    /// Predicates whose ordinal has no corresponding label slot are
    /// skipped: the format cannot carry role information for them, which
    /// is a limit of the column encoding, not an error.
    pub fn resolve<W: WordRow>(&self, sentence: &mut Sentence<W>) {
        let usable_slots = self.slots.usable_slots();
        let (words, predicates) = sentence.words_and_predicates_mut();
        let dependents = dependents_index(words);

        for predicate in predicates.iter_mut() {
            predicate.clear_arguments();

            let slot = predicate.ordinal();
            if slot >= usable_slots {
                continue;
            }

            for word in words {
                if let Some(label) = word.argument_label(slot) {
                    let mut argument = Argument::new(predicate.word_id(), label);
                    collect_subtree(word.id(), &dependents, &mut argument);
                    predicate.push_argument(argument);
                }
            }
        }

        let arguments: usize = predicates
            .iter()
            .map(|predicate| predicate.arguments().len())
            .sum();
        debug!(
            predicates = predicates.len(),
            arguments, "resolved arguments"
        );
    }
}

/// Index from a word id to the ids of its predicted dependents.
///
/// Built once per resolution so each subtree step is a lookup instead of a
/// scan over the whole sentence.
fn dependents_index<W: WordRow>(words: &[W]) -> HashMap<WordId, Vec<WordId>> {
    let mut index: HashMap<WordId, Vec<WordId>> = HashMap::new();
    for word in words {
        if let Some(head) = word.predicted_head() {
            index.entry(head).or_default().push(word.id());
        }
    }
    index
}

/// Collects `head` and every word transitively dependent on it into
/// `argument`.
///
/// The walk keeps an explicit stack and a visited set: the input structure
/// is assumed acyclic, but a malformed row can point a head at itself or
/// close a larger cycle, and the walk must terminate on such input rather
/// than recurse forever. Meeting an already-visited id stops the descent
/// and marks the argument incomplete.
fn collect_subtree(
    head: WordId,
    dependents: &HashMap<WordId, Vec<WordId>>,
    argument: &mut Argument,
) {
    let mut visited = HashSet::from([head]);
    let mut stack = vec![head];

    while let Some(id) = stack.pop() {
        argument.insert(id);

        let Some(children) = dependents.get(&id) else {
            continue;
        };
        for &child in children {
            if visited.insert(child) {
                stack.push(child);
            } else {
                warn!(
                    word = child,
                    label = argument.label(),
                    "already-collected word revisited, truncating subtree"
                );
                argument.mark_incomplete();
            }
        }
    }
}
