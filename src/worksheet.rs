use crate::{placeholder::PlaceholderVariable, step::Step};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};

/// Variables which may not be substituted by expressions sharing a variable
///
/// The variables of a group are kept in order of their first appearance, without duplicates.
///
/// # Example
/// ```
/// use mmpsheet::DisjointGroup;
///
/// let group = DisjointGroup::new(vec!["x", "y", "x", "z"]);
/// assert_eq!(group.variables(), &["x", "y", "z"]);
/// ```
#[derive(PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "use-serde", serde(transparent))]
pub struct DisjointGroup(Vec<String>);

impl DisjointGroup {
    pub fn new<S: Into<String>>(variables: impl IntoIterator<Item = S>) -> Self {
        let mut group = Vec::new();
        for var in variables {
            let var = var.into();
            if !group.contains(&var) {
                group.push(var);
            }
        }
        DisjointGroup(group)
    }

    pub fn variables(&self) -> &[String] {
        &self.0
    }
}

/// A parsed proof worksheet, ready to be loaded into the editor.
///
/// A worksheet is built by [`Worksheet::from_mmp`] and not changed afterwards.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct Worksheet {
    /// Text of the leading comment, empty if the worksheet has none
    pub description: String,
    pub disjoint_groups: Vec<DisjointGroup>,
    pub steps: Vec<Step>,
    pub placeholder_variables: Vec<PlaceholderVariable>,
}
