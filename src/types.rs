/// Type alias for the label of a proof step (see [`Step`][crate::Step])
pub type Label = String;

/// Type alias for the name of an assertion (axiom or theorem) used in a justification (see
/// [`Justification`][crate::Justification])
pub type AssertionName = String;
