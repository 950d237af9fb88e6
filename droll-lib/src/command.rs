use crate::dice;
use crate::error::Result;
use crate::parser::Parser;
use itertools::Itertools;
use tracing::debug;

mod limits {
    /// Default ceiling on the amount of dice across a whole command
    pub(crate) const MAX_DICE_AMOUNT: u64 = 255;
}

const TERM_SEPARATOR: char = '+';

/// Parse a roll command like `2d6+1d4` with the default dice ceiling
pub fn parse(input: &str) -> Result<dice::Instructions> {
    RollParser::default().parse(input)
}

/// Roll command parser, holding the parse options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollParser {
    max_dice: Option<u64>,
}

impl Default for RollParser {
    fn default() -> Self {
        RollParser {
            max_dice: Some(limits::MAX_DICE_AMOUNT),
        }
    }
}

impl RollParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ceiling on the amount of dice across all terms, `None` to disable it
    pub fn with_max_dice(mut self, max_dice: Option<u64>) -> Self {
        self.max_dice = max_dice;
        self
    }

    pub fn max_dice(&self) -> Option<u64> {
        self.max_dice
    }

    /// Parse and validate every term of the command, failing on the first invalid one
    pub fn parse(&self, input: &str) -> Result<dice::Instructions> {
        if input.is_empty() {
            return Err("No command provided.".into());
        }
        let mut amount = 0u64;
        let instructions = input
            .split(TERM_SEPARATOR)
            .map(|term| {
                let instruction = Self::parse_term(term)?;
                amount = amount.saturating_add(instruction.count() as u64);
                match self.max_dice {
                    Some(max) if amount > max => Err(format!(
                        "Too many dice requested: at most {max} dice may be rolled at once."
                    )
                    .into()),
                    _ => Ok(instruction),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(command = input, terms = instructions.len(), dice = amount, "parsed");
        Ok(dice::Instructions::new(instructions))
    }

    fn parse_term(term: &str) -> Result<dice::Instruction> {
        let (count, sides) = Parser::split_term(term).ok_or_else(|| {
            format!("Command token not recognized as a valid dice roll: {term}.")
        })?;
        let count = match parse_literal(count) {
            Some(n) if n > 0 => n,
            _ => {
                return Err(format!(
                    "'{count}' is not a valid number of dice. \
                     Acceptable values are greater than 0 and less than 256."
                )
                .into())
            }
        };
        let sides = match parse_literal(sides) {
            Some(s) if dice::is_allowed(s) => s,
            _ => {
                return Err(format!(
                    "'{sides}' is not a valid nor allowable number of sides for dice. \
                     Acceptable values include: [{}].",
                    dice::ALLOWED_SIDES.iter().format(", ")
                )
                .into())
            }
        };
        Ok(dice::Instruction::new(count, sides))
    }
}

/// Unsigned decimal literal fitting in a byte, signs rejected
fn parse_literal(literal: &str) -> Option<u8> {
    if !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit()) {
        literal.parse::<u8>().ok()
    } else {
        None
    }
}
