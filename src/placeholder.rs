use crate::step::Step;
use nom::{
    branch::alt,
    character::complete::{anychar, char, digit1, one_of},
    combinator::{map, recognize, value},
    multi::fold_many0,
    sequence::{pair, preceded},
    IResult,
};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// The syntactic category a placeholder variable stands for
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "use-serde", serde(rename_all = "lowercase"))]
pub enum SemanticType {
    Wff,
    Setvar,
    Class,
}

impl SemanticType {
    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'W' => Some(SemanticType::Wff),
            'S' => Some(SemanticType::Setvar),
            'C' => Some(SemanticType::Class),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SemanticType::Wff => "wff",
            SemanticType::Setvar => "setvar",
            SemanticType::Class => "class",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An automatically generated variable like `&W1` which stands for a not yet known part of a
/// formula
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct PlaceholderVariable {
    pub semantic_type: SemanticType,
    pub token: String,
}

impl PlaceholderVariable {
    /// Parses a placeholder variable token: `&` followed by one of `W`, `S`, `C` and one or more
    /// digits.
    ///
    /// # Example
    /// ```
    /// use mmpsheet::{PlaceholderVariable, SemanticType};
    ///
    /// let (remaining, var) = PlaceholderVariable::parse("&S12 )").unwrap();
    /// assert_eq!(remaining, " )");
    /// assert_eq!(var.semantic_type, SemanticType::Setvar);
    /// assert_eq!(var.token, "&S12");
    ///
    /// assert!(PlaceholderVariable::parse("&X1").is_err());
    /// assert!(PlaceholderVariable::parse("&W").is_err());
    /// ```
    pub fn parse(input: &str) -> IResult<&str, Self> {
        let (remaining, token) =
            recognize(preceded(char('&'), pair(one_of("WSC"), digit1)))(input)?;
        let semantic_type = token
            .chars()
            .nth(1)
            .and_then(SemanticType::from_marker)
            .ok_or_else(|| {
                nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::OneOf))
            })?;
        Ok((
            remaining,
            PlaceholderVariable {
                semantic_type,
                token: token.to_owned(),
            },
        ))
    }
}

fn placeholders_in(formula: &str) -> IResult<&str, Vec<PlaceholderVariable>> {
    fold_many0(
        alt((
            map(PlaceholderVariable::parse, Some),
            value(None, anychar),
        )),
        Vec::new,
        |mut acc, var| {
            if let Some(var) = var {
                acc.push(var);
            }
            acc
        },
    )(formula)
}

/// Collects the placeholder variables used in the formulas of `steps`, in order of their first
/// appearance and without duplicates.
///
/// # Example
/// ```
/// use mmpsheet::{placeholder::extract, SemanticType, Step};
///
/// let steps = vec![
///     Step::parse("d1:: |- ( &W1 -> &W1 )").unwrap().1,
///     Step::parse("d2:: |- ( &W2 -> &C3 )").unwrap().1,
/// ];
/// let vars = extract(&steps);
/// let vars: Vec<_> = vars.iter().map(|v| (v.semantic_type, v.token.as_str())).collect();
/// assert_eq!(
///     vars,
///     vec![
///         (SemanticType::Wff, "&W1"),
///         (SemanticType::Wff, "&W2"),
///         (SemanticType::Class, "&C3"),
///     ]
/// );
/// ```
pub fn extract(steps: &[Step]) -> Vec<PlaceholderVariable> {
    let mut vars: Vec<PlaceholderVariable> = Vec::new();
    for step in steps {
        // the fold consumes any character, so it cannot fail
        let found = placeholders_in(&step.formula)
            .map(|(_, found)| found)
            .unwrap_or_default();
        for var in found {
            if !vars.contains(&var) {
                vars.push(var);
            }
        }
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Justification, StepKind};

    fn step(formula: &str) -> Step {
        Step {
            label: "1".to_owned(),
            kind: StepKind::Derivation,
            justification: Justification::default(),
            formula: formula.to_owned(),
        }
    }

    fn tokens(vars: &[PlaceholderVariable]) -> Vec<(&'static str, &str)> {
        vars.iter()
            .map(|v| (v.semantic_type.name(), v.token.as_str()))
            .collect()
    }

    #[test]
    fn first_occurrence_order() {
        let steps = vec![step("|- ( &W1 -> &W2 )"), step("|- &W1")];
        assert_eq!(
            tokens(&extract(&steps)),
            vec![("wff", "&W1"), ("wff", "&W2")]
        );
    }

    #[test]
    fn all_types() {
        let steps = vec![step("|- A. &S1 &C22 = &W3")];
        assert_eq!(
            tokens(&extract(&steps)),
            vec![("setvar", "&S1"), ("class", "&C22"), ("wff", "&W3")]
        );
    }

    #[test]
    fn embedded_tokens() {
        let steps = vec![step("(&W1->&W10)&&S2&W"), step("&&W3x")];
        assert_eq!(
            tokens(&extract(&steps)),
            vec![("wff", "&W1"), ("wff", "&W10"), ("setvar", "&S2"), ("wff", "&W3")]
        );
    }

    #[test]
    fn no_placeholders() {
        assert!(extract(&[step("|- ( ph -> ch )"), step("")]).is_empty());
        assert!(extract(&[]).is_empty());
    }

    quickcheck! {
        fn extraction_is_idempotent(formulas: Vec<String>) -> bool {
            let steps: Vec<Step> = formulas.iter().map(|f| step(f)).collect();
            let vars = extract(&steps);
            let again: Vec<Step> = vars.iter().map(|v| step(&v.token)).collect();
            extract(&again) == vars
        }

        fn extraction_has_no_duplicates(numbers: Vec<u8>) -> bool {
            let formula = numbers
                .iter()
                .map(|n| format!("&W{}", n % 4))
                .collect::<Vec<_>>()
                .join(" ");
            let vars = extract(&[step(&formula)]);
            vars.iter()
                .enumerate()
                .all(|(i, v)| !vars[i + 1..].contains(v))
        }
    }
}
