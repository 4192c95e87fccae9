use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::grammar::{Axiom, Grammar, Rule};
use crate::utils::{GrammarError, Result};

/// A single production in a serialized L-system definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// The single-character predecessor symbol
    pub predecessor: String,
    /// The successor symbols; empty means the predecessor is deleted
    #[serde(default)]
    pub successor: String,
}

/// A serializable L-system definition.
///
/// This is the untrusted on-disk form; [`GrammarDefinition::build`] turns it
/// into a validated [`Grammar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarDefinition {
    /// Optional display name for the system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The rewritable symbols
    pub variables: String,
    /// The symbols exempt from rewriting
    #[serde(default)]
    pub constants: String,
    /// The generation-0 state
    pub axiom: String,
    /// The production rules
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl GrammarDefinition {
    /// Load a definition from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a definition from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definition = serde_json::from_str(json)?;
        Ok(definition)
    }

    /// Serialize the definition to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Validate the definition and build a grammar from it
    pub fn build(&self) -> Result<Grammar> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let mut chars = rule.predecessor.chars();
            let predecessor = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(GrammarError::Parse(format!(
                        "Rule predecessor must be a single symbol, got '{}'",
                        rule.predecessor
                    )));
                }
            };
            rules.push(Rule::new(predecessor, rule.successor.as_str()));
        }

        Grammar::new(
            Alphabet::new(&self.variables, &self.constants),
            Axiom::from(self.axiom.as_str()),
            rules,
        )
    }
}
