pub mod line;

use crate::dice;
use crate::error::Result;
use line::Line;
use rand::Rng;
use std::io::Write;
use tracing::debug;
use tracing::trace;

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, sides: u8) -> u8;
}

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u8) -> u8 {
        self.generator.gen_range(1..=sides)
    }
}

/// Roll every instruction using the default Rng source, reporting to `sink`
pub fn roll<W: Write>(instructions: &dice::Instructions, sink: &mut W) -> Result<u64> {
    roll_with(instructions, sink, &mut rand::thread_rng())
}

/// Roll every instruction using the provided Rng source
pub fn roll_with<W: Write, R: Rng>(
    instructions: &dice::Instructions,
    sink: &mut W,
    generator: &mut R,
) -> Result<u64> {
    roll_with_source(instructions, sink, &mut RandomSource { generator })
}

/// Roll every instruction using the provided source
///
/// Writes one line per die, an empty line after each instruction and a
/// final total line. The first failed write aborts the roll.
pub fn roll_with_source<W: Write, S: Source>(
    instructions: &dice::Instructions,
    sink: &mut W,
    source: &mut S,
) -> Result<u64> {
    let mut total = 0u64;
    for instruction in instructions {
        for _ in 0..instruction.count() {
            let outcome = throw(instruction.sides(), source);
            trace!(sides = outcome.sides, value = outcome.value, "rolled");
            total += outcome.value as u64;
            writeln!(sink, "{}", Line::Roll(outcome))?;
        }
        writeln!(sink, "{}", Line::Separator)?;
    }
    writeln!(sink, "{}", Line::Total(total))?;
    debug!(dice = instructions.total_dice(), total, "rolled all");
    Ok(total)
}

pub(crate) fn throw<S: Source>(sides: u8, source: &mut S) -> dice::Outcome {
    dice::Outcome::new(source.throw(sides), sides)
}
