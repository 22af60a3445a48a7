#![warn(missing_docs)]

//! Decoder and predicate→argument resolver for the CoNLL-2009 tabular
//! dependency/semantic-role format.
//!
//! Input is plain text: one word per line, thirty tab-separated feature
//! columns per word. Decoding yields a [`Sentence`] that owns the ordered
//! word rows and the predicates found among them; the [`ArgumentResolver`]
//! then reconstructs, for every predicate, which words constitute each of
//! its semantic arguments by collecting the dependency subtree below each
//! labeled head word.
//!
//! Acquiring the text (e.g. from a tagging service) and projecting the
//! resolved arguments back onto a document are a caller's concern; this
//! crate neither performs I/O nor aligns text.
//!
//! ```rust
//! use rolegraph::{ArgumentResolver, Sentence};
//!
//! # fn main() -> Result<(), rolegraph::RolegraphError> {
//! let text = "1\tFelix\tfelix\tfelix\tNNP\tNNP\t_\t_\t2\t2\tSBJ\tSBJ\t_\t_\tA0\n\
//!             2\tpurrs\tpurr\tpurr\tVBZ\tVBZ\t_\t_\t0\t0\tROOT\tROOT\tY\tpurr.01\t_";
//! let mut sentence: Sentence = text.parse()?;
//!
//! ArgumentResolver::new().resolve(&mut sentence);
//!
//! let predicate = &sentence.predicates()[0];
//! let argument = &predicate.arguments()[0];
//! assert_eq!(argument.label(), "A0");
//! assert_eq!(argument.surface_form(&sentence), "Felix");
//! # Ok(())
//! # }
//! ```

mod argument;
pub use argument::*;

mod decode;
pub use decode::*;

mod error;
pub use error::*;

mod predicate;
pub use predicate::*;

mod resolver;
pub use resolver::*;

mod row;
pub use row::*;

mod sentence;
pub use sentence::*;

mod word;
pub use word::*;
