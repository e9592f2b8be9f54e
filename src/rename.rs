use crate::{
    step::{Justification, Step, StepKind},
    types::*,
};
use std::collections::HashMap;

/// A label rewrite table built from the hypotheses of a worksheet.
///
/// A hypothesis written as `hd1::syllogism.1` is known to the worksheet as `d1`, but refers to the
/// hypothesis `syllogism.1` of the theorem being proven. The table maps `d1` to `syllogism.1`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenameTable {
    renaming: HashMap<Label, Label>,
}

impl RenameTable {
    /// Collects a rewrite for every hypothesis whose justification names an assertion. Other
    /// hypotheses keep their label.
    pub fn from_steps(steps: &[Step]) -> Self {
        let renaming = steps
            .iter()
            .filter(|step| step.kind == StepKind::Hypothesis)
            .filter(|step| !step.justification.assertion.is_empty())
            .map(|step| (step.label.clone(), step.justification.assertion.clone()))
            .collect();
        RenameTable { renaming }
    }

    pub fn is_empty(&self) -> bool {
        self.renaming.is_empty()
    }

    /// Returns the new name of `label`, or `label` itself if it is not renamed
    pub fn rename<'a>(&'a self, label: &'a str) -> &'a str {
        self.renaming
            .get(label)
            .map(|l| l.as_str())
            .unwrap_or(label)
    }

    /// Returns a copy of `step` with its own label and all references of its justification
    /// renamed. The assertion is left untouched.
    pub fn apply(&self, step: &Step) -> Step {
        Step {
            label: self.rename(&step.label).to_owned(),
            kind: step.kind,
            justification: Justification {
                refs: step
                    .justification
                    .refs
                    .iter()
                    .map(|r| self.rename(r).to_owned())
                    .collect(),
                assertion: step.justification.assertion.clone(),
            },
            formula: step.formula.clone(),
        }
    }
}

/// Renames hypotheses to the labels given in their justification and updates all references to
/// them.
///
/// The whole table is built before any step is rewritten, so a reference is resolved no matter
/// whether the hypothesis appears before or after the referencing step.
///
/// # Example
/// ```
/// use mmpsheet::{rename::rename, Step};
///
/// let steps = vec![
///     Step::parse("d2:d1:ax-mp |- ps").unwrap().1,
///     Step::parse("hd1::syllogism.1 |- ph").unwrap().1,
/// ];
/// let steps = rename(steps);
/// assert_eq!(steps[0].justification.to_string(), "syllogism.1:ax-mp");
/// assert_eq!(steps[1].label, "syllogism.1");
/// ```
pub fn rename(steps: Vec<Step>) -> Vec<Step> {
    let table = RenameTable::from_steps(&steps);
    if table.is_empty() {
        return steps;
    }
    log::debug!("renaming {} hypotheses", table.renaming.len());
    steps.iter().map(|step| table.apply(step)).collect()
}
