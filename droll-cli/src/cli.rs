use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const DROLL_AUTHOR: &str = crate_authors!();
const DROLL_VERSION: &str = crate_version!();
const DROLL_ABOUT: &str = crate_description!();
const DROLL_FLAG_D_SHORT: char = 'd';
const DROLL_FLAG_D_HELP: &str = "Enable Debug logging";
const DROLL_COMMAND_HELP: &str = "Dice to roll, e.g. `2d6+1d4`; a single d20 when omitted";
const DROLL_MAX_DICE_HELP: &str = "Maximum amount of dice rolled at once";
const DROLL_NO_LIMIT_HELP: &str = "Do not limit the amount of dice rolled at once";

/// Words that print the usage instead of rolling
const HELP_TRIGGERS: [&str; 6] = ["help", "?", "/?", "/help", "-?", "-help"];

pub const USAGE: &str = "\nName: droll\n\n\
    Description: droll is a dice rolling simulation program. Without any parameters the \
    program rolls a single d20 (a 20 sided die). However, different number/die side \
    combinations can be used when provided as command line arguments.\n\n\
    Example Usage: `droll 2d6` to roll two six-sided dice or `droll 2d6+1d4` to roll two \
    six-sided dice and one four-sided die.\n";

#[derive(Parser, Debug)]
#[command(author = DROLL_AUTHOR, version = DROLL_VERSION, about = DROLL_ABOUT)]
pub struct Args {
    #[arg(help = DROLL_COMMAND_HELP, allow_hyphen_values = true)]
    pub command: Option<String>,
    #[arg(short = DROLL_FLAG_D_SHORT, long, help = DROLL_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(long, env = "DROLL_MAX_DICE", default_value_t = 255, help = DROLL_MAX_DICE_HELP)]
    pub max_dice: u64,
    #[arg(long, help = DROLL_NO_LIMIT_HELP, action)]
    pub no_limit: bool,
}

impl Args {
    /// Check if the roll command is one of the help words
    pub fn wants_help(&self) -> bool {
        self.command.as_deref().map_or(false, is_help_trigger)
    }

    pub fn max_dice(&self) -> Option<u64> {
        if self.no_limit {
            None
        } else {
            Some(self.max_dice)
        }
    }
}

pub fn is_help_trigger(arg: &str) -> bool {
    let arg = arg.to_lowercase();
    HELP_TRIGGERS.contains(&arg.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_trigger_test() {
        for arg in ["help", "HELP", "?", "/?", "/Help", "-?", "-help"] {
            assert!(is_help_trigger(arg), "{arg}");
        }
        for arg in ["2d6", "helps", "--help", ""] {
            assert!(!is_help_trigger(arg), "{arg}");
        }
    }

    #[test]
    fn args_test() {
        let args = Args::try_parse_from(["droll", "2d6+1d4"]).unwrap();
        assert_eq!(Some("2d6+1d4"), args.command.as_deref());
        assert!(!args.wants_help());
        assert!(!args.debug);

        let args = Args::try_parse_from(["droll", "-help"]).unwrap();
        assert!(args.wants_help());

        let args = Args::try_parse_from(["droll", "--no-limit", "-d"]).unwrap();
        assert_eq!(None, args.command);
        assert_eq!(None, args.max_dice());
        assert!(args.debug);

        let args = Args::try_parse_from(["droll", "--max-dice", "10", "3d6"]).unwrap();
        assert_eq!(Some(10), args.max_dice());
    }
}
