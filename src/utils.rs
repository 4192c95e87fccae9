use std::io::{self, Write};

use thiserror::Error;

use crate::alphabet::{Alphabet, Symbol, SymbolString};

/// Custom error types for the L-system engine
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid symbol '{symbol}' not found in alphabet '{alphabet}'")]
    UnknownSymbol { symbol: Symbol, alphabet: Alphabet },

    #[error("Axiom symbol '{symbol}' not found in alphabet '{alphabet}'")]
    InvalidAxiomSymbol { symbol: Symbol, alphabet: Alphabet },

    #[error("Rule for '{predecessor}' uses symbol '{symbol}' not found in alphabet '{alphabet}'")]
    InvalidRuleSymbol {
        predecessor: Symbol,
        symbol: Symbol,
        alphabet: Alphabet,
    },

    #[error("Multiple rules with predecessor '{0}'")]
    DuplicatePredecessor(Symbol),
}

/// Result type for grammar operations
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Observer invoked once per generation during a rewrite run.
///
/// The engine itself never prints; narration, rendering and any other
/// per-generation side effect hang off this seam.
pub trait GenerationObserver {
    /// Called with the generation index (0 is the axiom) and its state
    fn on_generation(&mut self, index: usize, state: &SymbolString);
}

/// Observer that writes one `n=<i> : <state>` line per generation
#[derive(Debug)]
pub struct Narrator<W: Write> {
    writer: W,
}

impl<W: Write> Narrator<W> {
    /// Create a narrator writing to the given sink
    pub fn new(writer: W) -> Self {
        Narrator { writer }
    }

    /// Consume the narrator and recover the sink
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GenerationObserver for Narrator<W> {
    fn on_generation(&mut self, index: usize, state: &SymbolString) {
        // Narration is best-effort; a closed pipe should not abort the run
        let _ = writeln!(self.writer, "n={} : {}", index, state);
    }
}

/// Observer that records every generation it sees
#[derive(Debug, Default)]
pub struct Recorder {
    generations: Vec<SymbolString>,
}

impl Recorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Recorder::default()
    }

    /// The recorded generations, in order
    pub fn generations(&self) -> &[SymbolString] {
        &self.generations
    }

    /// Consume the recorder and return the recorded generations
    pub fn into_generations(self) -> Vec<SymbolString> {
        self.generations
    }
}

impl GenerationObserver for Recorder {
    fn on_generation(&mut self, _index: usize, state: &SymbolString) {
        self.generations.push(state.clone());
    }
}
