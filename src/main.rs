use std::io::{self, BufRead, Write};
use std::{env, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use memsim_error::{Error, Result};
use simulator::{allocate, compare_policies, run_paging, FitPolicy, PagingSession, ReplacementPolicy};
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

mod parse;
mod render;

/// Replays page reference strings and hole-fitting decisions.
#[derive(Parser)]
#[command(name = "memsim", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a whole reference string and print every step
    Paging(PagingArgs),
    /// Step through a reference string one access at a time, driven by stdin
    Step(StepArgs),
    /// Choose a hole for one process
    Allocate(AllocateArgs),
}

#[derive(Args)]
struct PagingArgs {
    /// Number of physical frames
    #[arg(short, long)]
    frames: usize,

    /// fifo, lru or optimal
    #[arg(short, long, default_value = "fifo")]
    policy: ReplacementPolicy,

    /// Compare fault counts of every policy instead of printing steps
    #[arg(long)]
    all_policies: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Page references, numeric or symbolic
    #[arg(name = "PAGES")]
    pages: Vec<String>,
}

#[derive(Args)]
struct StepArgs {
    #[arg(short, long)]
    frames: usize,

    #[arg(short, long, default_value = "fifo")]
    policy: ReplacementPolicy,

    #[arg(name = "PAGES")]
    pages: Vec<String>,
}

#[derive(Args)]
struct AllocateArgs {
    /// Hole sizes in input order, e.g. "100 500 200"
    #[arg(long)]
    holes: String,

    /// Size of the process to place
    #[arg(short, long, value_parser = parse::parse_positive)]
    size: u64,

    /// first, best or worst
    #[arg(short, long, default_value = "first")]
    policy: FitPolicy,

    #[arg(long)]
    json: bool,
}

fn log_level() -> Level {
    match env::var("LOG_LEVEL") {
        Ok(v) => match v.to_uppercase().as_str() {
            "ERROR" => Level::ERROR,
            "WARN" => Level::WARN,
            "INFO" => Level::INFO,
            "DEBUG" => Level::DEBUG,
            "TRACE" => Level::TRACE,
            _ => {
                eprintln!("Invalid LOG_LEVEL '{}', defaulting to WARN", v);
                Level::WARN
            }
        },
        Err(_) => Level::WARN,
    }
}

fn main() -> ExitCode {
    let log_level = log_level();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global subscriber");
    debug!("Log level set to {:?}", log_level);

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Paging(args) => paging(args),
        Command::Step(args) => step(args),
        Command::Allocate(args) => allocation(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("memsim: {err}");
            ExitCode::FAILURE
        }
    }
}

fn paging(args: PagingArgs) -> Result<()> {
    let reference = parse::parse_pages(&args.pages)?;
    info!(references = reference.len(), frames = args.frames, "bulk replay");

    if args.all_policies {
        let tallies = compare_policies(&reference, args.frames)?;
        if args.json {
            println!("{}", render::json(&tallies)?);
        } else {
            println!("{}", render::comparison(args.frames, &tallies));
        }
        return Ok(());
    }

    let report = run_paging(&reference, args.frames, args.policy)?;
    if args.json {
        println!("{}", render::json(&report)?);
    } else {
        println!("{}", render::report(args.policy, args.frames, &report));
    }
    Ok(())
}

fn step(args: StepArgs) -> Result<()> {
    let reference = parse::parse_pages(&args.pages)?;
    let mut session = PagingSession::new(reference, args.frames, args.policy)?;

    println!(
        "{} with {} frame(s), {} reference(s). Commands: step (or enter), reset, quit",
        args.policy,
        args.frames,
        session.remaining()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" | "s" | "step" => match session.step() {
                Ok((outcome, tally)) => {
                    println!("{}", render::step_line(&outcome));
                    println!("{}", render::tally_line(&tally));
                }
                Err(Error::Exhausted) => println!("simulation complete"),
                Err(err) => return Err(err),
            },
            "r" | "reset" => {
                session.reset();
                println!("session reset");
            }
            "q" | "quit" => break,
            other => println!("unknown command {other:?}"),
        }
        stdout.flush()?;
    }
    Ok(())
}

fn allocation(args: AllocateArgs) -> Result<()> {
    let holes = parse::parse_sizes(&args.holes)?;
    let result = allocate(&holes, args.size, args.policy)?;

    if args.json {
        println!("{}", render::json(&result)?);
    } else {
        println!("{}", render::allocation(&result));
    }
    Ok(())
}
