use crate::types::*;
use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::char,
    combinator::rest,
    IResult,
};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Leading character of a label that marks the step as a hypothesis
pub const HYPOTHESIS_MARKER: char = 'h';
/// Leading character of a label that marks the step as still being worked on
pub const IN_PROGRESS_MARKER: char = '!';
/// Label of the step that concludes the proof
pub const GOAL_LABEL: &str = "qed";

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "use-serde", serde(rename_all = "lowercase"))]
pub enum StepKind {
    Hypothesis,
    Derivation,
    Goal,
}

/// The claim of a step: which earlier steps and which assertion combine to derive it.
///
/// A justification is written as `refs:assertion` where `refs` is a space separated list of
/// labels. A justification without references and without an assertion is empty and written as
/// the empty string.
///
/// # Example
/// ```
/// use mmpsheet::Justification;
///
/// let jstf = Justification::new(vec!["d5".to_owned(), "d6".to_owned()], "ax-mp".to_owned());
/// assert_eq!(jstf.to_string(), "d5 d6:ax-mp");
/// assert_eq!(Justification::default().to_string(), "");
/// assert_eq!(Justification::new(vec![], "ax-1".to_owned()).to_string(), ":ax-1");
/// ```
#[derive(PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct Justification {
    pub refs: Vec<Label>,
    pub assertion: AssertionName,
}

impl Justification {
    pub fn new(refs: Vec<Label>, assertion: AssertionName) -> Self {
        Justification { refs, assertion }
    }

    /// Builds a justification from the comma separated reference list of a step line. Empty
    /// entries of the list are dropped.
    pub fn from_step_line(refs: &str, assertion: &str) -> Self {
        Justification {
            refs: refs
                .split(',')
                .filter(|r| !r.is_empty())
                .map(|r| r.to_owned())
                .collect(),
            assertion: assertion.to_owned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty() && self.assertion.is_empty()
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}:{}", self.refs.join(" "), self.assertion)
    }
}

/// One line of a proof worksheet
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct Step {
    pub label: Label,
    pub kind: StepKind,
    pub justification: Justification,
    pub formula: String,
}

impl Step {
    /// Parses a single logical step line of the form `label:refs:assertion formula`.
    ///
    /// A leading [`HYPOTHESIS_MARKER`] makes the step a hypothesis, a leading
    /// [`IN_PROGRESS_MARKER`] is dropped. The step labelled [`GOAL_LABEL`] is the goal.
    ///
    /// # Example
    /// ```
    /// use mmpsheet::{Step, StepKind};
    ///
    /// let (_, step) = Step::parse("!d4:d5,d6:ax-mp   |- ( &W1 -> ( ph -> ch ) ) ").unwrap();
    /// assert_eq!(step.label, "d4");
    /// assert_eq!(step.kind, StepKind::Derivation);
    /// assert_eq!(step.justification.to_string(), "d5 d6:ax-mp");
    /// assert_eq!(step.formula, "|- ( &W1 -> ( ph -> ch ) )");
    ///
    /// let (_, step) = Step::parse("hd1::syllogism.1 |- ( ph -> ps )").unwrap();
    /// assert_eq!(step.label, "d1");
    /// assert_eq!(step.kind, StepKind::Hypothesis);
    /// assert_eq!(step.justification.to_string(), ":syllogism.1");
    ///
    /// assert!(Step::parse("|- ( ph -> ps )").is_err());
    /// ```
    pub fn parse(input: &str) -> IResult<&str, Self> {
        let (input, label) = take_till1(|c: char| c == ':')(input)?;
        let (input, _) = char(':')(input)?;
        let (input, refs) = take_till(|c: char| c == ':' || c.is_whitespace())(input)?;
        let (input, _) = char(':')(input)?;
        let (input, assertion) = take_till(char::is_whitespace)(input)?;
        let (input, formula) = rest(input)?;

        let is_hypothesis = label.starts_with(HYPOTHESIS_MARKER);
        let label = label.strip_prefix(HYPOTHESIS_MARKER).unwrap_or(label);
        let label = label.strip_prefix(IN_PROGRESS_MARKER).unwrap_or(label);
        let kind = if is_hypothesis {
            StepKind::Hypothesis
        } else if label == GOAL_LABEL {
            StepKind::Goal
        } else {
            StepKind::Derivation
        };
        Ok((
            input,
            Step {
                label: label.to_owned(),
                kind,
                justification: Justification::from_step_line(refs, assertion),
                formula: formula.trim().to_owned(),
            },
        ))
    }

    /// Returns `true` if `line` is the beginning of a step
    pub fn is_step_line(line: &str) -> bool {
        Self::parse(line).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Step {
        Step::parse(line).unwrap().1
    }

    #[test]
    fn goal() {
        let step = parse("qed:d3,d4:ax-mp     |- ( ph -> ch ) ");
        assert_eq!(step.kind, StepKind::Goal);
        assert_eq!(step.label, "qed");
        assert_eq!(
            step.justification,
            Justification::new(vec!["d3".to_owned(), "d4".to_owned()], "ax-mp".to_owned())
        );
        assert_eq!(step.formula, "|- ( ph -> ch )");
    }

    #[test]
    fn in_progress_goal() {
        let step = parse("!qed:: |- ph");
        assert_eq!(step.kind, StepKind::Goal);
        assert_eq!(step.label, "qed");
    }

    #[test]
    fn empty_justification() {
        let step = parse("!d3::              |- &W1");
        assert_eq!(step.label, "d3");
        assert!(step.justification.is_empty());
        assert_eq!(step.justification.to_string(), "");
        assert_eq!(step.formula, "|- &W1");
    }

    #[test]
    fn refs_without_assertion() {
        let step = parse("d7:d1,,d2: |- ps");
        assert_eq!(step.justification.refs, vec!["d1", "d2"]);
        assert_eq!(step.justification.assertion, "");
        assert_eq!(step.justification.to_string(), "d1 d2:");
    }

    #[test]
    fn no_formula() {
        let step = parse("d1::ax-1");
        assert_eq!(step.formula, "");
        assert_eq!(step.justification.to_string(), ":ax-1");
    }

    #[test]
    fn hypothesis_marker_before_in_progress_marker() {
        let step = parse("h!1::hyp |- ph");
        assert_eq!(step.kind, StepKind::Hypothesis);
        assert_eq!(step.label, "1");

        let step = parse("!h1::hyp |- ph");
        assert_eq!(step.kind, StepKind::Derivation);
        assert_eq!(step.label, "h1");
    }

    #[test]
    fn not_a_step() {
        assert!(!Step::is_step_line(""));
        assert!(!Step::is_step_line(":a:b"));
        assert!(!Step::is_step_line("d1:a b:c"));
        assert!(!Step::is_step_line("$)"));
        assert!(!Step::is_step_line("  |- ( ph -> ch )"));
    }
}
