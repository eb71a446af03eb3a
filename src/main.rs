use anyhow::{bail, Result};
use clap::{Parser as ClapParser, Subcommand};
use colored::Colorize;

use tailrec::ast::FunctionDef;
use tailrec::interpreter::{ExecError, Interpreter, Value};
use tailrec::{rewrite, samples, unparse, validate};

#[derive(ClapParser)]
#[command(name = "tailrec")]
#[command(version = "0.1.0")]
#[command(about = "Tail-recursion validation and loop rewriting demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in sample functions
    List,
    /// Validate a sample and print the diagnostics
    Check {
        /// Sample function name
        name: String,
    },
    /// Print a sample before and after rewriting
    Show {
        /// Sample function name
        name: String,
    },
    /// Run a sample through the interpreter, original vs. rewritten
    Run {
        /// Sample function name
        name: String,

        /// Positional integer arguments for the call
        args: Vec<i64>,

        /// Interpreter recursion limit for the original function
        #[arg(short, long, default_value = "1000")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_samples(),
        Commands::Check { name } => check_sample(&name)?,
        Commands::Show { name } => show_sample(&name)?,
        Commands::Run { name, args, limit } => run_sample(&name, args, limit)?,
    }

    Ok(())
}

fn find_sample(name: &str) -> Result<FunctionDef> {
    match samples::by_name(name) {
        Some(func) => Ok(func),
        None => {
            let known: Vec<String> = samples::all().into_iter().map(|f| f.name).collect();
            bail!("unknown sample '{}'; available: {}", name, known.join(", "));
        }
    }
}

fn list_samples() {
    for func in samples::all() {
        let verdict = match validate(&func) {
            Ok(()) => "tail-recursive".green(),
            Err(_) => "not tail-recursive".red(),
        };
        let params: Vec<&str> = func.params.iter().map(|p| p.name.as_str()).collect();
        println!(
            "{}({})  {}",
            func.name.bold(),
            params.join(", "),
            verdict
        );
    }
}

fn check_sample(name: &str) -> Result<()> {
    let func = find_sample(name)?;
    match validate(&func) {
        Ok(()) => {
            println!("{} '{}' is tail-recursive", "OK".green().bold(), name);
        }
        Err(err) => {
            println!("{} {}", "FAIL".red().bold(), err);
        }
    }
    Ok(())
}

fn show_sample(name: &str) -> Result<()> {
    let func = find_sample(name)?;
    println!("{}", "# original".dimmed());
    print!("{}", unparse(&func));

    match validate(&func) {
        Ok(()) => {
            let rewritten = rewrite(func);
            println!();
            println!("{}", "# rewritten".dimmed());
            print!("{}", unparse(&rewritten));
        }
        Err(err) => {
            println!();
            eprintln!("{} {}", "cannot rewrite:".red().bold(), err);
        }
    }
    Ok(())
}

fn run_sample(name: &str, args: Vec<i64>, limit: usize) -> Result<()> {
    let func = find_sample(name)?;
    if let Err(err) = validate(&func) {
        bail!("{}", err);
    }

    let values: Vec<Value> = args.iter().map(|&i| Value::Int(i)).collect();

    let mut original = Interpreter::with_recursion_limit(limit);
    original.define_function(func.clone());
    match original.call(name, values.clone()) {
        Ok(result) => println!("{}  {}", "original:".bold(), result),
        Err(ExecError::RecursionLimit(limit)) => println!(
            "{}  {}",
            "original:".bold(),
            format!("recursion limit of {} exceeded", limit).yellow()
        ),
        Err(err) => println!("{}  {}", "original:".bold(), err.to_string().red()),
    }

    let rewritten = rewrite(func);
    let mut optimized = Interpreter::with_recursion_limit(limit);
    optimized.define_function(rewritten);
    match optimized.call(name, values) {
        Ok(result) => println!("{} {}", "rewritten:".bold(), result),
        Err(err) => println!("{} {}", "rewritten:".bold(), err.to_string().red()),
    }

    Ok(())
}
