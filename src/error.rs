use thiserror::Error;

use crate::types::Label;

/// A failure reported by the editor or the unification engine behind it
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("{message}")]
pub struct EditorError {
    pub message: String,
}

impl EditorError {
    pub fn new(message: impl Into<String>) -> Self {
        EditorError {
            message: message.into(),
        }
    }
}

/// A error which is produced while running a command against the editor
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MacroError {
    /// A step was looked up by a label no step in the editor carries (see
    /// [`step_index`](../editor/fn.step_index.html))
    #[error("Cannot find the step with the label '{0}'")]
    StepNotFound(Label),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

pub type Result<T> = std::result::Result<T, MacroError>;
