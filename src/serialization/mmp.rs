use log::{debug, info};
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value},
    IResult,
};

use crate::{
    placeholder, rename,
    step::Step,
    worksheet::{DisjointGroup, Worksheet},
};

pub const HEADER_MARKER: &str = "$(";
pub const FOOTER_MARKER: &str = "$)";
pub const PROOF_MARKER: &str = "$=";
pub const COMMENT_MARKER: &str = "*";
pub const DISJOINT_MARKER: &str = "$d";

/// The kind of a block of consecutive lines in a MMP file. Every part starts with a line of its
/// kind and extends over all following lines that do not start a new part.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Part {
    Header,
    Comment,
    Disjoint,
    Step,
    Footer,
    Proof,
}

impl Part {
    /// Classifies the first line of a part. The order of the alternatives matters: a comment
    /// line is never a step, even if it looks like one.
    fn classify(line: &str) -> IResult<&str, Part> {
        alt((
            value(Part::Header, tag(HEADER_MARKER)),
            value(Part::Comment, tag(COMMENT_MARKER)),
            value(Part::Disjoint, tag(DISJOINT_MARKER)),
            map(Step::parse, |_| Part::Step),
            value(Part::Footer, tag(FOOTER_MARKER)),
            value(Part::Proof, tag(PROOF_MARKER)),
        ))(line)
    }

    fn of_line(line: &str) -> Option<Part> {
        Self::classify(line).ok().map(|(_, part)| part)
    }
}

#[derive(Default)]
struct MmpParser<'a> {
    description: Option<String>,
    disjoint_groups: Vec<DisjointGroup>,
    steps: Vec<Step>,
    part: Option<Part>,
    lines: Vec<&'a str>,
}

impl<'a> MmpParser<'a> {
    fn push_line(&mut self, line: &'a str) {
        if let Some(part) = Part::of_line(line) {
            self.close_part();
            self.part = Some(part);
        }
        self.lines.push(line);
    }

    fn close_part(&mut self) {
        let lines = std::mem::take(&mut self.lines);
        let part = match self.part.take() {
            Some(part) => part,
            None => {
                if !lines.is_empty() {
                    debug!("skipping {} lines before the first part", lines.len());
                }
                return;
            }
        };
        match part {
            Part::Comment => {
                if self.description.is_none()
                    && self.disjoint_groups.is_empty()
                    && self.steps.is_empty()
                {
                    let text = lines.join("\n");
                    let text = text.strip_prefix(COMMENT_MARKER).unwrap_or(&text);
                    self.description = Some(text.to_owned());
                } else {
                    debug!("dropping comment of {} lines", lines.len());
                }
            }
            Part::Disjoint => {
                let text = lines.join(" ");
                let text = text.strip_prefix(DISJOINT_MARKER).unwrap_or(&text);
                self.disjoint_groups
                    .push(DisjointGroup::new(text.split_whitespace()));
            }
            Part::Step => {
                let text = lines.join(" ");
                match Step::parse(&text) {
                    Ok((_, step)) => self.steps.push(step),
                    Err(e) => debug!("dropping step {:?}: {}", text, e),
                }
            }
            Part::Header | Part::Footer | Part::Proof => {}
        }
    }

    fn finish(mut self) -> Worksheet {
        self.close_part();
        Worksheet {
            description: self.description.unwrap_or_default(),
            disjoint_groups: self.disjoint_groups,
            steps: self.steps,
            placeholder_variables: Vec::new(),
        }
    }
}

/// Splits the text of a MMP file into its parts and collects description, disjoint variable
/// groups and steps. Placeholder variables are not collected and hypotheses are not renamed (see
/// [`Worksheet::from_mmp`]).
///
/// This never fails: a line that does not start a new part belongs to the part before it.
///
/// # Example
/// ```
/// use mmpsheet::serialization::parse;
///
/// let worksheet = parse(
///     "* A short proof\n\
///      $d x y\n\
///      qed::ax-1 |- ( ph ->\n\
///      ( ps -> ph ) )\n\
///      $)",
/// );
/// assert_eq!(worksheet.description, " A short proof");
/// assert_eq!(worksheet.disjoint_groups[0].variables(), &["x", "y"]);
/// assert_eq!(worksheet.steps[0].formula, "|- ( ph -> ( ps -> ph ) )");
/// ```
pub fn parse(text: &str) -> Worksheet {
    let mut parser = MmpParser::default();
    for line in text.lines() {
        parser.push_line(line);
    }
    parser.finish()
}

impl Worksheet {
    /// Parses the text of a MMP file, collects its placeholder variables and renames its
    /// hypotheses (see [`parse`], [`placeholder::extract`] and [`rename::rename`]).
    pub fn from_mmp(text: &str) -> Self {
        let mut worksheet = parse(text);
        worksheet.placeholder_variables = placeholder::extract(&worksheet.steps);
        worksheet.steps = rename::rename(worksheet.steps);
        info!(
            "parsed worksheet: {} steps, {} disjoint groups, {} placeholder variables",
            worksheet.steps.len(),
            worksheet.disjoint_groups.len(),
            worksheet.placeholder_variables.len()
        );
        worksheet
    }
}
