use lsys_gen::utils::Narrator;
use lsys_gen::{Grammar, GrammarBuilder, GrammarDefinition};
use std::error::Error;
use std::io;

/// Example of defining L-systems programmatically, from text and from JSON
fn main() -> Result<(), Box<dyn Error>> {
    // Example 1: a binary tree skeleton via the builder
    let grammar = GrammarBuilder::new()
        .variables("01")
        .constants("[]")
        .axiom("0")
        .rule('1', "11")
        .rule('0', "1[0]0")
        .build()?;

    println!("Binary tree:");
    let mut narrator = Narrator::new(io::stdout().lock());
    grammar.generate_with(3, &mut narrator);

    // Example 2: the same system in the plain-text format
    let text = "\
        variables: 01\n\
        constants: []\n\
        axiom: 0\n\
        1 -> 11\n\
        0 -> 1[0]0\n";
    let parsed = Grammar::from_str(text)?;
    assert_eq!(parsed.generate(3), grammar.generate(3));

    // Example 3: a deletion rule, defined in JSON
    let definition = GrammarDefinition::from_json_str(
        r#"{
            "name": "decay",
            "variables": "AB",
            "axiom": "ABABA",
            "rules": [
                { "predecessor": "B", "successor": "" }
            ]
        }"#,
    )?;
    let decay = definition.build()?;

    println!("\nDecay:");
    let mut narrator = Narrator::new(io::stdout().lock());
    decay.generate_with(1, &mut narrator);

    Ok(())
}
