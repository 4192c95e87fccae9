//! Lsys-Gen is a deterministic, context-free L-system engine.
//!
//! An L-system rewrites a symbol string generation by generation: every
//! symbol with a production rule is replaced by the rule's successor in a
//! single left-to-right pass, while constants and unmapped symbols pass
//! through unchanged. All validation happens when the grammar is built, so
//! generation itself can never fail.
//!
//! # Example
//!
//! ```rust
//! use lsys_gen::GrammarBuilder;
//!
//! // Lindenmayer's algae system
//! let grammar = GrammarBuilder::new()
//!     .variables("AB")
//!     .axiom("A")
//!     .rule('A', "AB")
//!     .rule('B', "A")
//!     .build()
//!     .unwrap();
//!
//! let generations = grammar.generate(4);
//! assert_eq!(generations[4].to_string(), "ABAABABA");
//! ```

pub mod alphabet;
pub mod definition;
pub mod grammar;
pub mod presets;
pub mod utils;

pub use alphabet::{Alphabet, Symbol, SymbolString};
pub use definition::{GrammarDefinition, RuleDefinition};
pub use grammar::{Axiom, Generations, Grammar, GrammarBuilder, Rule};
pub use utils::{GenerationObserver, GrammarError, Narrator, Recorder, Result};
