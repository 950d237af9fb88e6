use clap::Parser;
use colored::Colorize;
use droll_lib::command::RollParser;
use droll_lib::dice::Instructions;
use droll_lib::error::Error;
use droll_lib::roll;
use std::io::BufWriter;
use std::io::Write;
use std::process::ExitCode;
use tracing::Level;

mod cli;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    if args.wants_help() {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let instructions = match &args.command {
        Some(command) => {
            match RollParser::new()
                .with_max_dice(args.max_dice())
                .parse(command)
            {
                Ok(instructions) => instructions,
                Err(error) => {
                    eprintln!("{}", format!("\n{}\n", error).bold().red());
                    return ExitCode::from(2);
                }
            }
        }
        None => Instructions::default(),
    };
    tracing::debug!(%instructions, "rolling");

    match run(&instructions) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", format!("droll: error: {}", error).bold().red());
            ExitCode::FAILURE
        }
    }
}

fn run(instructions: &Instructions) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let mut sink = BufWriter::new(stdout.lock());
    roll::roll(instructions, &mut sink)?;
    sink.flush()?;
    Ok(())
}
