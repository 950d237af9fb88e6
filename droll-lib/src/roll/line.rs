use crate::dice;

/// Keep a single line of the roll report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Roll(dice::Outcome),
    Separator,
    Total(u64),
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Roll(outcome) => write!(f, "Rolling a d{}... {}", outcome.sides, outcome.value),
            Line::Separator => Ok(()),
            Line::Total(total) => write!(f, "Total: {total}"),
        }
    }
}
