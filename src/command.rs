use log::{debug, error};

use crate::{
    editor::Editor,
    error::Result,
    unify::{self, UnifyOutcome},
    worksheet::Worksheet,
};

/// Name of the module the commands are registered under
pub const MODULE_NAME: &str = "MMJ2";
pub const IMPORT_PROMPT: &str = "MMP file content:";

/// The commands this crate offers to the editor
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// Asks for the text of a MMP file and loads it into the editor
    ImportFromMmp,
    /// Unifies the editor content, resolving a single wrong justification if possible (see
    /// [`unify::recover`])
    Unify,
}

/// Result of running a [`Command`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CommandOutcome {
    /// The user did not confirm the prompt
    Cancelled,
    Imported,
    Unified(UnifyOutcome),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ImportFromMmp => "Import from MMP file",
            Command::Unify => "Unify",
        }
    }

    /// Runs this command.
    ///
    /// # Errors
    /// Any error is shown to the user, together with its debug representation, and then returned.
    pub fn run<E: Editor + ?Sized>(&self, editor: &mut E) -> Result<CommandOutcome> {
        debug!("running command {:?}", self.name());
        let result = match self {
            Command::ImportFromMmp => import_from_mmp(editor),
            Command::Unify => unify::unify(editor).map(CommandOutcome::Unified),
        };
        result.map_err(|e| {
            error!("command {:?} failed: {}", self.name(), e);
            if let Err(display_error) = editor.show_error(&format!("{}\n{:?}", e, e)) {
                error!("could not show error: {}", display_error);
            }
            e
        })
    }
}

/// The commands of this crate together with the name of their module
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MacroModule {
    pub name: &'static str,
    pub commands: Vec<Command>,
}

impl Default for MacroModule {
    fn default() -> Self {
        MacroModule {
            name: MODULE_NAME,
            commands: vec![Command::ImportFromMmp, Command::Unify],
        }
    }
}

impl MacroModule {
    pub fn command(&self, name: &str) -> Option<Command> {
        self.commands.iter().copied().find(|c| c.name() == name)
    }
}

/// Replaces the editor content with `worksheet` and unifies it
pub fn load_worksheet<E: Editor + ?Sized>(editor: &mut E, worksheet: &Worksheet) -> Result<()> {
    editor.reset_content()?;
    editor.set_description(&worksheet.description)?;
    editor.add_steps(&worksheet.steps, &worksheet.placeholder_variables)?;
    editor.set_disjoints(&worksheet.disjoint_groups)?;
    editor.unify_all()?;
    Ok(())
}

fn import_from_mmp<E: Editor + ?Sized>(editor: &mut E) -> Result<CommandOutcome> {
    let answer = editor.prompt_multiline_text(IMPORT_PROMPT)?;
    if !answer.confirmed {
        return Ok(CommandOutcome::Cancelled);
    }
    load_worksheet(editor, &Worksheet::from_mmp(&answer.text))?;
    Ok(CommandOutcome::Imported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        editor::{
            testing::{Call, ScriptedEditor},
            PromptAnswer,
        },
        error::{EditorError, MacroError},
        unify::NOTHING_TO_UNIFY,
    };

    const MMP: &str = "$( <MM> <PROOF_ASST> THEOREM=a1ii\n\
                       * Inference adding two antecedents.\n\
                       $d x y\n\
                       hd1::a1ii.1 |- ph\n\
                       d2:d1:a1i |- ( &W1 -> ph )\n\
                       qed:d2:a1i |- ( ch -> ( ps -> ph ) )\n\
                       $)";

    #[test]
    fn module() {
        let module = MacroModule::default();
        assert_eq!(module.name, "MMJ2");
        assert_eq!(
            module.command("Import from MMP file"),
            Some(Command::ImportFromMmp)
        );
        assert_eq!(module.command("Unify"), Some(Command::Unify));
        assert_eq!(module.command("Prove"), None);
    }

    #[test]
    fn import() {
        let mut editor = ScriptedEditor::default();
        editor.answer = PromptAnswer {
            confirmed: true,
            text: MMP.to_owned(),
        };
        assert_eq!(
            Command::ImportFromMmp.run(&mut editor),
            Ok(CommandOutcome::Imported)
        );
        assert_eq!(
            editor.calls,
            vec![
                Call::Prompt(IMPORT_PROMPT.to_owned()),
                Call::ResetContent,
                Call::SetDescription(" Inference adding two antecedents.".to_owned()),
                Call::AddSteps(
                    vec!["a1ii.1".to_owned(), "d2".to_owned(), "qed".to_owned()],
                    vec!["&W1".to_owned()]
                ),
                Call::SetDisjoints(vec![vec!["x".to_owned(), "y".to_owned()]]),
                Call::Unify,
            ]
        );
        assert_eq!(editor.state.steps[1].justification_text, "a1ii.1:a1i");
    }

    #[test]
    fn import_cancelled() {
        let mut editor = ScriptedEditor::default();
        editor.answer = PromptAnswer {
            confirmed: false,
            text: MMP.to_owned(),
        };
        assert_eq!(
            Command::ImportFromMmp.run(&mut editor),
            Ok(CommandOutcome::Cancelled)
        );
        assert_eq!(editor.calls, vec![Call::Prompt(IMPORT_PROMPT.to_owned())]);
    }

    #[test]
    fn unify() {
        let mut editor = ScriptedEditor::default();
        assert_eq!(
            Command::Unify.run(&mut editor),
            Ok(CommandOutcome::Unified(UnifyOutcome::NothingToUnify))
        );
        assert_eq!(
            editor.calls,
            vec![Call::Unify, Call::Info(NOTHING_TO_UNIFY.to_owned())]
        );
    }

    #[test]
    fn failure_is_shown_and_returned() {
        let mut editor = ScriptedEditor::default();
        editor.answer = PromptAnswer {
            confirmed: true,
            text: MMP.to_owned(),
        };
        editor.failing = vec!["add_steps"];
        let error = MacroError::Editor(EditorError::new("add_steps failed"));
        assert_eq!(Command::ImportFromMmp.run(&mut editor), Err(error.clone()));
        assert_eq!(
            editor.calls.last(),
            Some(&Call::Error(format!("add_steps failed\n{:?}", error)))
        );
    }

    #[test]
    fn failure_to_show_keeps_original_error() {
        let mut editor = ScriptedEditor::default();
        editor.failing = vec!["unify", "show_error"];
        assert_eq!(
            Command::Unify.run(&mut editor),
            Err(MacroError::Editor(EditorError::new("unify failed")))
        );
        assert_eq!(editor.calls.len(), 2);
    }
}
