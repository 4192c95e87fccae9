use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::alphabet::{Alphabet, Symbol, SymbolString};
use crate::utils::{GenerationObserver, GrammarError, Result};

/// The initial (generation-0) state string of an L-system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axiom {
    symbols: SymbolString,
}

impl Axiom {
    /// Create an axiom from a symbol string.
    ///
    /// An axiom holds no reference to an alphabet; membership of its symbols
    /// is checked by [`Grammar::new`].
    pub fn new(symbols: SymbolString) -> Self {
        Axiom { symbols }
    }

    /// The axiom's symbols
    pub fn symbols(&self) -> &SymbolString {
        &self.symbols
    }
}

impl From<&str> for Axiom {
    fn from(text: &str) -> Self {
        Axiom::new(SymbolString::from(text))
    }
}

/// A production rule replacing one predecessor symbol with a successor
/// string on each rewrite pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    predecessor: Symbol,
    successor: SymbolString,
}

impl Rule {
    /// Create a rule. An empty successor encodes deletion of the
    /// predecessor on application.
    pub fn new(predecessor: impl Into<Symbol>, successor: impl Into<SymbolString>) -> Self {
        Rule {
            predecessor: predecessor.into(),
            successor: successor.into(),
        }
    }

    /// The symbol this rule rewrites
    pub fn predecessor(&self) -> Symbol {
        self.predecessor
    }

    /// The replacement string
    pub fn successor(&self) -> &SymbolString {
        &self.successor
    }
}

/// A deterministic context-free L-system: an alphabet, an axiom and at most
/// one production rule per predecessor symbol.
///
/// All validation happens here, eagerly: a constructed grammar cannot fail
/// during generation. The grammar itself is immutable and keeps no state
/// between rewrite runs.
#[derive(Debug, Clone)]
pub struct Grammar {
    alphabet: Alphabet,
    axiom: Axiom,
    rules: Vec<Rule>,
    lookup: HashMap<Symbol, usize>,
}

impl Grammar {
    /// Validate and assemble a grammar.
    ///
    /// Fails with [`GrammarError::InvalidAxiomSymbol`] if the axiom strays
    /// outside the alphabet, [`GrammarError::InvalidRuleSymbol`] if a rule's
    /// predecessor or successor does, and
    /// [`GrammarError::DuplicatePredecessor`] if two rules share a
    /// predecessor. The first violation, in input order, is reported.
    pub fn new(alphabet: Alphabet, axiom: Axiom, rules: Vec<Rule>) -> Result<Self> {
        if let Some(symbol) = alphabet.find_unknown(axiom.symbols()) {
            return Err(GrammarError::InvalidAxiomSymbol { symbol, alphabet });
        }

        let mut lookup = HashMap::with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            let predecessor = rule.predecessor();
            if !alphabet.contains(predecessor) {
                return Err(GrammarError::InvalidRuleSymbol {
                    predecessor,
                    symbol: predecessor,
                    alphabet,
                });
            }
            if let Some(symbol) = alphabet.find_unknown(rule.successor()) {
                return Err(GrammarError::InvalidRuleSymbol {
                    predecessor,
                    symbol,
                    alphabet,
                });
            }
            match lookup.entry(predecessor) {
                Entry::Occupied(_) => {
                    return Err(GrammarError::DuplicatePredecessor(predecessor));
                }
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
        }

        Ok(Grammar {
            alphabet,
            axiom,
            rules,
            lookup,
        })
    }

    /// Parse a grammar from a plain-text definition file.
    ///
    /// The format is line-oriented: `#` starts a comment,
    /// `variables:`/`constants:`/`axiom:` headers list symbols, and each
    /// remaining line is a production `P -> S...`. Whitespace between
    /// symbols is ignored; an empty right-hand side is a deletion rule.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a grammar from its plain-text definition
    pub fn from_str(text: &str) -> Result<Self> {
        let rule_regex = Regex::new(r"^(\S)\s*->(.*)$").unwrap();

        let mut variables: Option<String> = None;
        let mut constants = String::new();
        let mut axiom: Option<String> = None;
        let mut rules = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix("variables:") {
                variables = Some(strip_whitespace(rest));
            } else if let Some(rest) = trimmed.strip_prefix("constants:") {
                constants = strip_whitespace(rest);
            } else if let Some(rest) = trimmed.strip_prefix("axiom:") {
                axiom = Some(strip_whitespace(rest));
            } else if let Some(captures) = rule_regex.captures(trimmed) {
                let predecessor = captures.get(1).unwrap().as_str().chars().next().unwrap();
                let successor = strip_whitespace(captures.get(2).unwrap().as_str());
                rules.push(Rule::new(predecessor, successor.as_str()));
            } else {
                return Err(GrammarError::Parse(format!(
                    "Unrecognized line '{}'",
                    trimmed
                )));
            }
        }

        let variables =
            variables.ok_or_else(|| GrammarError::Parse("Missing 'variables:' line".into()))?;
        let axiom = axiom.ok_or_else(|| GrammarError::Parse("Missing 'axiom:' line".into()))?;

        Grammar::new(
            Alphabet::new(&variables, &constants),
            Axiom::from(axiom.as_str()),
            rules,
        )
    }

    /// Apply one context-free rewrite pass to a state.
    ///
    /// Each symbol is mapped left to right: constants and symbols with no
    /// rule pass through unchanged, everything else is replaced by its
    /// rule's successor. Successor symbols are never re-expanded within the
    /// same pass.
    pub fn step(&self, state: &SymbolString) -> SymbolString {
        let mut next = Vec::with_capacity(state.len());
        for &symbol in state.iter() {
            // Constants shadow any rule naming them as predecessor
            if self.alphabet.is_constant(symbol) {
                next.push(symbol);
                continue;
            }
            match self.lookup.get(&symbol) {
                Some(&index) => next.extend_from_slice(self.rules[index].successor()),
                None => next.push(symbol),
            }
        }
        SymbolString::from(next)
    }

    /// Run the rewrite loop, collecting every generation.
    ///
    /// Generation 0 is the axiom verbatim, so the result holds
    /// `iterations + 1` states. State length can grow multiplicatively with
    /// each pass; callers are responsible for keeping `iterations` within
    /// their memory budget (see [`Grammar::generations`] for the lazy
    /// variant).
    pub fn generate(&self, iterations: usize) -> Vec<SymbolString> {
        self.generations(iterations).collect()
    }

    /// Lazily iterate the generations `0..=iterations`
    pub fn generations(&self, iterations: usize) -> Generations<'_> {
        Generations {
            grammar: self,
            next: Some(self.axiom.symbols().clone()),
            remaining: iterations,
        }
    }

    /// Run the rewrite loop, handing each generation to an observer, and
    /// return the final state
    pub fn generate_with(
        &self,
        iterations: usize,
        observer: &mut dyn GenerationObserver,
    ) -> SymbolString {
        let mut state = self.axiom.symbols().clone();
        observer.on_generation(0, &state);
        for index in 1..=iterations {
            state = self.step(&state);
            observer.on_generation(index, &state);
        }
        state
    }

    /// The grammar's alphabet
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The grammar's axiom
    pub fn axiom(&self) -> &Axiom {
        &self.axiom
    }

    /// The production rules, in the order they were supplied
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule rewriting the given symbol, if one exists
    pub fn rule_for(&self, symbol: Symbol) -> Option<&Rule> {
        self.lookup.get(&symbol).map(|&index| &self.rules[index])
    }
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Lazy iterator over a grammar's generations, from the axiom up to a fixed
/// iteration count. Yields each state exactly once and cannot be restarted.
#[derive(Debug)]
pub struct Generations<'a> {
    grammar: &'a Grammar,
    next: Option<SymbolString>,
    remaining: usize,
}

impl Iterator for Generations<'_> {
    type Item = SymbolString;

    fn next(&mut self) -> Option<SymbolString> {
        let current = self.next.take()?;
        if self.remaining > 0 {
            self.remaining -= 1;
            self.next = Some(self.grammar.step(&current));
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.next.is_some() {
            self.remaining + 1
        } else {
            0
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Generations<'_> {}

/// Builder for constructing validated grammars
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    variables: String,
    constants: String,
    axiom: String,
    rules: Vec<Rule>,
}

impl GrammarBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        GrammarBuilder::default()
    }

    /// Add variable symbols to the alphabet
    pub fn variables(mut self, symbols: &str) -> Self {
        self.variables.push_str(symbols);
        self
    }

    /// Add constant symbols to the alphabet
    pub fn constants(mut self, symbols: &str) -> Self {
        self.constants.push_str(symbols);
        self
    }

    /// Set the axiom
    pub fn axiom(mut self, symbols: &str) -> Self {
        self.axiom = symbols.to_string();
        self
    }

    /// Add a production rule
    pub fn rule(mut self, predecessor: char, successor: &str) -> Self {
        self.rules.push(Rule::new(predecessor, successor));
        self
    }

    /// Validate and build the grammar
    pub fn build(self) -> Result<Grammar> {
        Grammar::new(
            Alphabet::new(&self.variables, &self.constants),
            Axiom::from(self.axiom.as_str()),
            self.rules,
        )
    }
}
