//! `mmpsheet` reads proof worksheets written in the MMP format of
//! [mmj2](https://github.com/digitalsavant/mmj2) and drives a proof editor through a small set of
//! commands. It does not check proofs itself; unification is left to the engine behind the
//! editor.
//!
//! # Main data structures
//! There are three main data structures in `mmpsheet`: [`Step`]s, [`Worksheet`]s and the
//! [`Editor`](editor::Editor) interface.
//!
//! ## Steps
//! A [`Step`] is one line of a proof. It has a label, a formula and a [`Justification`] naming the
//! earlier steps and the assertion it is derived from. Steps are either hypotheses, derivations or
//! the goal `qed`.
//!
//! ## Worksheets
//! A [`Worksheet`] is the result of reading a MMP file (see [`Worksheet::from_mmp`]). Besides the
//! steps it carries the leading comment as description, the groups of disjoint variables and the
//! placeholder variables (like `&W1`) occuring in the formulas.
//!
//! Hypotheses in a MMP file are labelled like any other step and name the hypothesis of the
//! theorem they stand for in their justification. When reading a worksheet they are renamed to
//! that name, and all references to them are updated (see [`rename`]).
//!
//! ## Editors
//! Everything that happens in the proof editor goes through the [`Editor`](editor::Editor) trait.
//! The two [`Command`]s of this crate only use this trait: importing a MMP file and unifying the
//! editor content while resolving a single wrong justification (see [`unify::recover`]).

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

mod command;
pub mod editor;
pub mod error;
pub mod placeholder;
pub mod rename;
pub mod serialization;
mod step;
mod types;
pub mod unify;
mod worksheet;

pub use command::*;
pub use error::{EditorError, MacroError};
pub use placeholder::{PlaceholderVariable, SemanticType};
pub use step::*;
pub use types::*;
pub use worksheet::*;
