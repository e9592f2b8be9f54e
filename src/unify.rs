use log::{debug, info, warn};

use crate::{
    editor::{Editor, EditorState, EditorStep, StepUpdate},
    error::{EditorError, Result},
    types::*,
};

/// Beginning of the unification error the engine reports for a justification naming an
/// assertion that does not fit the step
pub const NO_MATCH_PREFIX: &str = "Could not find a match for assertion";

pub const NOTHING_TO_UNIFY: &str = "Nothing to unify.";
pub const UNDETERMINED: &str = "Cannot determine how to unify.";
pub const AMBIGUOUS: &str =
    "Cannot determine how to unify because there are more than one error in the editor.";

/// Returns the first step, in editor order, which has an error (see
/// [`EditorStep::has_error`])
pub fn first_erroring_step(state: &EditorState) -> Option<&EditorStep> {
    state.steps.iter().find(|step| step.has_error())
}

/// Result of [`recover`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum UnifyOutcome {
    /// No step has an error, nothing was changed
    NothingToUnify,
    /// The first erroneous step has an error the recovery cannot handle, nothing was changed
    Undetermined,
    /// Clearing the justification of the step with this label removed all errors. The
    /// justification stays cleared.
    Unified(Label),
    /// Clearing the justification of the step with this label did not remove all errors. The
    /// justification was restored and the editor unified again.
    Ambiguous(Label),
}

impl UnifyOutcome {
    /// Shows the message for this outcome to the user, if there is one
    pub fn report<E: Editor + ?Sized>(
        &self,
        editor: &mut E,
    ) -> std::result::Result<(), EditorError> {
        match self {
            UnifyOutcome::NothingToUnify => editor.show_info(NOTHING_TO_UNIFY),
            UnifyOutcome::Undetermined => editor.show_info(UNDETERMINED),
            UnifyOutcome::Unified(_) => Ok(()),
            UnifyOutcome::Ambiguous(_) => editor.show_error(AMBIGUOUS),
        }
    }
}

fn set_justification<E: Editor + ?Sized>(
    editor: &mut E,
    label: &str,
    justification: String,
) -> std::result::Result<(), EditorError> {
    editor.update_steps(&[StepUpdate {
        label: label.to_owned(),
        justification,
    }])
}

/// Tries to resolve a single wrong justification.
///
/// The editor is unified. If the first erroneous step failed because its assertion does not
/// match, its justification is cleared so the engine can find the assertion itself. If errors
/// remain after that, there is more than one problem and the justification is put back.
///
/// This handles at most one error and never retries.
pub fn recover<E: Editor + ?Sized>(editor: &mut E) -> Result<UnifyOutcome> {
    let state = editor.unify_all()?;
    let step = match first_erroring_step(&state) {
        Some(step) => step,
        None => return Ok(UnifyOutcome::NothingToUnify),
    };
    let no_match = step
        .unification_error
        .as_deref()
        .map_or(false, |e| e.starts_with(NO_MATCH_PREFIX));
    if !no_match {
        debug!("step {} has an error which cannot be recovered", step.label);
        return Ok(UnifyOutcome::Undetermined);
    }

    let label = step.label.clone();
    let original = step.justification_text.clone();
    debug!("clearing justification {:?} of step {}", original, label);
    set_justification(editor, &label, String::new())?;
    let state = editor.unify_all()?;
    if first_erroring_step(&state).is_none() {
        info!("unified after clearing the justification of step {}", label);
        return Ok(UnifyOutcome::Unified(label));
    }

    warn!(
        "errors remain after clearing step {}, restoring {:?}",
        label, original
    );
    set_justification(editor, &label, original)?;
    editor.unify_all()?;
    Ok(UnifyOutcome::Ambiguous(label))
}

/// Runs [`recover`] and reports the outcome to the user
pub fn unify<E: Editor + ?Sized>(editor: &mut E) -> Result<UnifyOutcome> {
    let outcome = recover(editor)?;
    outcome.report(editor)?;
    Ok(outcome)
}
