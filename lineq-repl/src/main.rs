mod error;
mod game;

use clap::Parser;
use game::{Command, Game, Outcome};
use lineq_compute::ComputeEngine;
use lineq_solver::options::{GenerationOptionsBuilder, MAX_DIFFICULTY};
use rand::{rngs::StdRng, SeedableRng};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead, IsTerminal};

/// Solve random linear equations one move at a time.
#[derive(Parser, Debug)]
#[command(name = "lineq", version, about, long_about = None)]
struct Args {
    /// How many fragments each generated equation has, and which kinds.
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DIFFICULTY as i64),
    )]
    difficulty: u32,

    /// Seed for the random number generator, to replay the same problems.
    #[arg(short, long)]
    seed: Option<u64>,

    /// The name of the unknown.
    #[arg(short, long, default_value = "x")]
    unknown: String,

    /// Log how equations are generated and solved.
    #[arg(short, long)]
    verbose: bool,
}

const HELP: &str = "\
Pick the next move by typing its number.
  solve <equation>  show every step of the solution of an equation
  skip              start a new problem
  help              show this message
  quit              leave the game";

/// Prints the current problem and its choices.
fn show(game: &mut Game) {
    match game.problem() {
        Ok(problem) => {
            println!();
            println!("{}", problem.statement());
            for (i, choice) in problem.choices().iter().enumerate() {
                println!("  {}) {}", i + 1, choice.text);
            }
        },
        Err(err) => err.report_to_stderr(""),
    }
}

/// Runs one command. Returns false if the player wants to leave.
fn run_command(game: &mut Game, input: &str) -> bool {
    match Command::parse(input) {
        Command::Answer(index) => match game.answer(index) {
            Outcome::Advanced => println!("Correct!"),
            Outcome::Solved => println!("Solved! {} problems solved so far.", game.solved()),
            Outcome::Wrong => println!("Wrong move. Here is a new problem."),
            Outcome::NoSuchChoice => {
                println!("There is no choice {}.", index + 1);
                return true;
            },
        },
        Command::Solve(equation) => {
            game::print_solution(game.engine(), equation);
            return true;
        },
        Command::Skip => game.skip(),
        Command::Help => {
            println!("{}", HELP);
            return true;
        },
        Command::Quit => return false,
        Command::Unknown(line) => {
            println!("Unknown command `{}`. Type `help` for the commands.", line);
            return true;
        },
    }

    show(game);
    true
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("could not initialize logging: {}", err);
    }

    let engine = ComputeEngine::new(args.unknown);

    if !io::stdin().is_terminal() {
        // solve every equation read from stdin
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            };
            if line.trim().is_empty() {
                continue;
            }

            println!("{}", line.trim());
            game::print_solution(&engine, &line);
            println!();
        }
        return;
    }

    let options = GenerationOptionsBuilder::new()
        .difficulty(args.difficulty)
        .build();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(engine, options, rng);

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    fn process_line(rl: &mut DefaultEditor, game: &mut Game) -> Result<bool, ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(true);
        }

        rl.add_history_entry(&input)?;
        Ok(run_command(game, &input))
    }

    println!("{}", HELP);
    show(&mut game);
    loop {
        match process_line(&mut rl, &mut game) {
            Ok(true) => (),
            Ok(false) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    err => error::Error::from(err).report_to_stderr(""),
                }
                break;
            },
        }
    }

    println!("Score: {} correct moves, {} problems solved.", game.score(), game.solved());
}
