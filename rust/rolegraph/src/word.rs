//! The CoNLL-2009 row schema.
//!
//! One row describes one word as 30 tab-separated columns: ID, FORM, LEMMA,
//! PLEMMA, POS, PPOS, FEAT, PFEAT, HEAD, PHEAD, DEPREL, PDEPREL, FILLPRED,
//! PRED, and APRED1 through APRED16. The format is specified by the
//! CoNLL-2009 shared task data description
//! (<http://ufal.mff.cuni.cz/conll2009-st/task-description.html>).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RolegraphError;
use crate::row::{PLACEHOLDER, WordId, WordRow, is_placeholder};

/// Number of columns in a CoNLL-2009 row.
pub const FORMAT_COLUMNS: usize = 30;

/// Number of APRED columns the schema reserves.
///
/// Argument labels are positional: APRED*i* holds a word's role with respect
/// to the sentence's *i*-th predicate, so a sentence can carry role
/// information for at most this many predicates. A hard format limit.
pub const ARG_COLUMNS: usize = 16;

const ID: usize = 0;
const FORM: usize = 1;
const LEMMA: usize = 2;
const PLEMMA: usize = 3;
const POS: usize = 4;
const PPOS: usize = 5;
const FEAT: usize = 6;
const PFEAT: usize = 7;
const HEAD: usize = 8;
const PHEAD: usize = 9;
const DEPREL: usize = 10;
const PDEPREL: usize = 11;
const FILLPRED: usize = 12;
const PRED: usize = 13;
const ARG_OFFSET: usize = FORMAT_COLUMNS - ARG_COLUMNS;

/// One word of a sentence together with all its CoNLL-2009 features.
///
/// A `Word2009` is an immutable value constructed once from a decoded row.
/// The ID, HEAD and PHEAD columns are parsed at construction; the canonical
/// column text is kept alongside, so the original row can be rendered back.
///
/// Rows shorter than the schema are right-padded with [`PLACEHOLDER`];
/// columns beyond the schema width are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Word2009 {
    columns: Vec<String>,
    id: WordId,
    head: Option<WordId>,
    phead: Option<WordId>,
}

impl Word2009 {
    /// Builds a word from raw column values in schema order.
    ///
    /// Missing trailing columns read back as the placeholder; surplus
    /// columns are dropped. Fails when the ID column is not numeric or a
    /// head-pointer column holds something other than an ordinal or the
    /// placeholder.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, RolegraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<String> = columns
            .into_iter()
            .take(FORMAT_COLUMNS)
            .map(Into::into)
            .collect();
        columns.resize_with(FORMAT_COLUMNS, || PLACEHOLDER.to_string());

        let id = columns[ID]
            .parse::<WordId>()
            .map_err(|_| RolegraphError::InvalidWordId(columns[ID].clone()))?;
        let head = parse_head(&columns[HEAD])?;
        let phead = parse_head(&columns[PHEAD])?;

        Ok(Word2009 {
            columns,
            id,
            head,
            phead,
        })
    }

    /// Automatically pre-analyzed lemma.
    pub fn plemma(&self) -> &str {
        &self.columns[PLEMMA]
    }

    /// Automatically pre-analyzed part-of-speech tag.
    pub fn ppos(&self) -> &str {
        &self.columns[PPOS]
    }

    /// Morphological and lexical features.
    pub fn feat(&self) -> &str {
        &self.columns[FEAT]
    }

    /// Automatically pre-analyzed morphological and lexical features.
    pub fn pfeat(&self) -> &str {
        &self.columns[PFEAT]
    }

    /// Gold syntactic governor, if any.
    pub fn head(&self) -> Option<WordId> {
        self.head
    }

    /// Gold dependency relation to the head.
    pub fn deprel(&self) -> &str {
        &self.columns[DEPREL]
    }

    /// Automatically inferred dependency relation.
    pub fn pdeprel(&self) -> &str {
        &self.columns[PDEPREL]
    }

    /// Holds `Y` on rows whose PRED column is (or should be) filled.
    pub fn fillpred(&self) -> &str {
        &self.columns[FILLPRED]
    }

    /// Raw PRED column text, placeholder included.
    pub fn pred(&self) -> &str {
        &self.columns[PRED]
    }

    /// Whether this word is a predicate, i.e. its PRED column is neither the
    /// placeholder nor blank.
    pub fn is_predicate(&self) -> bool {
        !is_placeholder(self.pred())
    }

    /// The argument-label columns as read by the reference behavior: the
    /// slice covering APRED1 through APRED15.
    ///
    /// The schema reserves [`ARG_COLUMNS`] APRED columns but this slice
    /// stops one short of them, so the last column is not addressable
    /// through it. [`argument_column`] reaches the full range.
    ///
    /// [`argument_column`]: Word2009::argument_column
    pub fn argument_labels(&self) -> &[String] {
        &self.columns[ARG_OFFSET..FORMAT_COLUMNS - 1]
    }

    /// Raw text of the `slot`-th APRED column (0-indexed, full 16-column
    /// range), or `None` when `slot` is out of schema range.
    pub fn argument_column(&self, slot: usize) -> Option<&str> {
        if slot >= ARG_COLUMNS {
            return None;
        }
        Some(&self.columns[ARG_OFFSET + slot])
    }
}

fn parse_head(raw: &str) -> Result<Option<WordId>, RolegraphError> {
    if is_placeholder(raw) {
        return Ok(None);
    }
    raw.parse::<WordId>()
        .map(Some)
        .map_err(|_| RolegraphError::InvalidHeadPointer(raw.to_string()))
}

impl WordRow for Word2009 {
    fn id(&self) -> WordId {
        self.id
    }

    fn form(&self) -> &str {
        &self.columns[FORM]
    }

    fn lemma(&self) -> &str {
        &self.columns[LEMMA]
    }

    fn pos(&self) -> &str {
        &self.columns[POS]
    }

    fn predicted_head(&self) -> Option<WordId> {
        self.phead
    }

    fn predicate_sense(&self) -> Option<&str> {
        if self.is_predicate() {
            Some(self.pred())
        } else {
            None
        }
    }

    fn argument_label(&self, slot: usize) -> Option<&str> {
        let column = self.argument_column(slot)?;
        if is_placeholder(column) {
            None
        } else {
            Some(column)
        }
    }
}

impl FromStr for Word2009 {
    type Err = RolegraphError;

    /// Parses one tab-separated row.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Word2009::from_columns(line.trim().split('\t'))
    }
}

impl From<Word2009> for Vec<String> {
    fn from(word: Word2009) -> Self {
        word.columns
    }
}

impl TryFrom<Vec<String>> for Word2009 {
    type Error = RolegraphError;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        Word2009::from_columns(columns)
    }
}

impl fmt::Display for Word2009 {
    /// Renders a human-readable dump of all fields, suppressing APRED
    /// columns that hold the placeholder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Id:\t\t{}", self.columns[ID])?;
        writeln!(f, "Form:\t\t{}", self.form())?;
        writeln!(f, "Lemma:\t\t{}", self.lemma())?;
        writeln!(f, "PLemma:\t\t{}", self.plemma())?;
        writeln!(f, "POS:\t\t{}", self.pos())?;
        writeln!(f, "PPOS:\t\t{}", self.ppos())?;
        writeln!(f, "Feat:\t\t{}", self.feat())?;
        writeln!(f, "PFeat:\t\t{}", self.pfeat())?;
        writeln!(f, "Head:\t\t{}", self.columns[HEAD])?;
        writeln!(f, "PHead:\t\t{}", self.columns[PHEAD])?;
        writeln!(f, "Deprel:\t\t{}", self.deprel())?;
        writeln!(f, "PDeprel:\t{}", self.pdeprel())?;
        writeln!(f, "Fillpred:\t{}", self.fillpred())?;
        writeln!(f, "Pred:\t\t{}", self.pred())?;

        for slot in 0..ARG_COLUMNS {
            if let Some(label) = self.argument_label(slot) {
                writeln!(f, "Apred {:02}:\t{}", slot + 1, label)?;
            }
        }

        Ok(())
    }
}
