use clap::{Parser, Subcommand};
use lsys_gen::utils::Narrator;
use lsys_gen::{Grammar, GrammarDefinition, presets};
use std::io;
use std::path::PathBuf;

/// Deterministic L-system generator
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the L-system definition file
    #[arg(help = "Path to the L-system definition file")]
    grammar_file: Option<PathBuf>,

    /// Number of rewrite iterations
    #[arg(help = "Number of rewrite iterations", default_value = "5")]
    iterations: Option<usize>,

    /// Treat the definition file as JSON rather than plain text
    #[arg(long)]
    json: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one of the built-in classic systems
    Preset {
        /// Name of the system (see `list`)
        #[arg(help = "Name of the built-in system")]
        name: String,

        /// Number of rewrite iterations
        #[arg(help = "Number of rewrite iterations", default_value = "5")]
        iterations: Option<usize>,
    },
    /// List the built-in classic systems
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Commands::Preset { name, iterations } => {
                let grammar = presets::preset(&name)
                    .ok_or_else(|| format!("Unknown preset: {} (try `list`)", name))?;
                narrate(&grammar, iterations.unwrap_or(5));
            }
            Commands::List => {
                for name in presets::PRESET_NAMES {
                    println!("{}", name);
                }
            }
        }
        return Ok(());
    }

    let grammar_file = cli.grammar_file.ok_or("Grammar file path required")?;
    let iterations = cli.iterations.unwrap_or(5);

    let grammar = if cli.json {
        GrammarDefinition::from_json_file(&grammar_file)?.build()?
    } else {
        Grammar::from_file(&grammar_file)?
    };

    narrate(&grammar, iterations);
    Ok(())
}

fn narrate(grammar: &Grammar, iterations: usize) {
    let mut narrator = Narrator::new(io::stdout().lock());
    grammar.generate_with(iterations, &mut narrator);
}
