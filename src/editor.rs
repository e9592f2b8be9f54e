//! The interface to the proof editor and the unification engine behind it.
//!
//! Nothing in this crate talks to a concrete editor. Commands receive an implementation of
//! [`Editor`] and only use the operations declared there, one request at a time.

use crate::{
    error::{EditorError, MacroError, Result},
    placeholder::PlaceholderVariable,
    step::Step,
    types::*,
    worksheet::DisjointGroup,
};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};

/// Status of a step as reported by the unification engine
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub enum StepStatus {
    #[default]
    #[cfg_attr(feature = "use-serde", serde(rename = ""))]
    Unknown,
    #[cfg_attr(feature = "use-serde", serde(rename = "~"))]
    Waiting,
    #[cfg_attr(feature = "use-serde", serde(rename = "v"))]
    Valid,
    #[cfg_attr(feature = "use-serde", serde(rename = "x"))]
    Error,
}

/// A step as the editor currently shows it
#[derive(PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct EditorStep {
    pub label: Label,
    pub status: StepStatus,
    /// Justification exactly as typed in the editor
    pub justification_text: String,
    pub statement_error: Option<String>,
    pub syntax_error: Option<String>,
    pub unification_error: Option<String>,
}

fn is_set(error: &Option<String>) -> bool {
    error.as_ref().map_or(false, |e| !e.is_empty())
}

impl EditorStep {
    /// Returns `true` if the engine marked this step as erroneous or attached any error to it
    pub fn has_error(&self) -> bool {
        self.status == StepStatus::Error
            || is_set(&self.statement_error)
            || is_set(&self.syntax_error)
            || is_set(&self.unification_error)
    }
}

/// Snapshot of the editor content
#[derive(PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct EditorState {
    pub steps: Vec<EditorStep>,
}

/// Returns the position of the step labelled `label`.
///
/// # Errors
/// `StepNotFound` if no step carries this label
///
/// # Example
/// ```
/// use mmpsheet::editor::{step_index, EditorState, EditorStep};
/// use mmpsheet::MacroError;
///
/// let state = EditorState {
///     steps: vec![
///         EditorStep { label: "d1".to_owned(), ..Default::default() },
///         EditorStep { label: "qed".to_owned(), ..Default::default() },
///     ],
/// };
/// assert_eq!(step_index(&state, "qed"), Ok(1));
/// assert_eq!(step_index(&state, "d2"), Err(MacroError::StepNotFound("d2".to_owned())));
/// ```
pub fn step_index(state: &EditorState, label: &str) -> Result<usize> {
    state
        .steps
        .iter()
        .position(|step| step.label == label)
        .ok_or_else(|| MacroError::StepNotFound(label.to_owned()))
}

/// Returns the step labelled `label` (see [`step_index`])
pub fn step_by_label<'a>(state: &'a EditorState, label: &str) -> Result<&'a EditorStep> {
    Ok(&state.steps[step_index(state, label)?])
}

/// A change of a single step's justification
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct StepUpdate {
    pub label: Label,
    pub justification: String,
}

/// Answer of the user to a free text prompt
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct PromptAnswer {
    pub confirmed: bool,
    pub text: String,
}

/// Operations of the proof editor used by the commands of this crate.
///
/// Every method is a single request; the caller waits for its answer before issuing the next
/// one.
pub trait Editor {
    fn reset_content(&mut self) -> std::result::Result<(), EditorError>;

    fn set_description(&mut self, description: &str) -> std::result::Result<(), EditorError>;

    fn add_steps(
        &mut self,
        steps: &[Step],
        placeholder_variables: &[PlaceholderVariable],
    ) -> std::result::Result<(), EditorError>;

    fn set_disjoints(&mut self, groups: &[DisjointGroup]) -> std::result::Result<(), EditorError>;

    fn update_steps(&mut self, updates: &[StepUpdate]) -> std::result::Result<(), EditorError>;

    /// Asks the engine to unify all steps
    fn unify(&mut self) -> std::result::Result<(), EditorError>;

    fn get_state(&mut self) -> std::result::Result<EditorState, EditorError>;

    /// Unifies all steps and returns the resulting state
    fn unify_all(&mut self) -> std::result::Result<EditorState, EditorError> {
        self.unify()?;
        self.get_state()
    }

    fn prompt_multiline_text(
        &mut self,
        question: &str,
    ) -> std::result::Result<PromptAnswer, EditorError>;

    fn show_info(&mut self, text: &str) -> std::result::Result<(), EditorError>;

    fn show_error(&mut self, text: &str) -> std::result::Result<(), EditorError>;
}
