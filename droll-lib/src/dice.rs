use std::ops::Deref;

/// Die shapes that can be rolled
pub const ALLOWED_SIDES: [u8; 6] = [4, 6, 8, 10, 12, 20];

/// Check if a die with `sides` faces can be rolled
pub fn is_allowed(sides: u8) -> bool {
    ALLOWED_SIDES.contains(&sides)
}

/// One homogeneous group of dice, e.g. the `2d6` in `2d6+1d4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    count: u8,
    sides: u8,
}

impl Instruction {
    /// Only the parser builds instructions, after validating both fields
    pub(crate) fn new(count: u8, sides: u8) -> Self {
        Instruction { count, sides }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Ordered instructions produced by one parse, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions(Vec<Instruction>);

impl Instructions {
    pub(crate) fn new(instructions: Vec<Instruction>) -> Self {
        Instructions(instructions)
    }

    /// Amount of dice rolled across every instruction
    pub fn total_dice(&self) -> u64 {
        self.0.iter().map(|i| i.count as u64).sum()
    }
}

/// A single d20, rolled when no specification is given
impl Default for Instructions {
    fn default() -> Self {
        Instructions(vec![Instruction::new(1, 20)])
    }
}

impl Deref for Instructions {
    type Target = [Instruction];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Instructions {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Instructions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use itertools::Itertools;
        write!(f, "{}", self.0.iter().format("+"))
    }
}

/// Keep one die result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub sides: u8,
    pub value: u8,
}

impl Outcome {
    pub fn new(value: u8, sides: u8) -> Self {
        Outcome { sides, value }
    }
}

impl Deref for Outcome {
    type Target = u8;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
