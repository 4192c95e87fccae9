use lsys_gen::utils::{Narrator, Recorder};
use lsys_gen::{Alphabet, Axiom, Grammar, GrammarBuilder, GrammarDefinition, GrammarError, Rule};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;

fn strings(generations: &[lsys_gen::SymbolString]) -> Vec<String> {
    generations.iter().map(|state| state.to_string()).collect()
}

#[test]
fn test_algae_end_to_end() {
    let grammar = GrammarBuilder::new()
        .variables("AB")
        .axiom("A")
        .rule('A', "AB")
        .rule('B', "A")
        .build()
        .unwrap();

    assert_eq!(
        strings(&grammar.generate(5)),
        vec![
            "A",
            "AB",
            "ABA",
            "ABAAB",
            "ABAABABA",
            "ABAABABAABAAB",
        ]
    );
}

#[test]
fn test_koch_curve_end_to_end() {
    let grammar = GrammarBuilder::new()
        .variables("F")
        .constants("+-")
        .axiom("F")
        .rule('F', "F+F-F-F+F")
        .build()
        .unwrap();

    let generations = grammar.generate(2);
    assert_eq!(generations[1].to_string(), "F+F-F-F+F");
    // Every F becomes five symbols and the constants stay, so 5^2 total
    assert_eq!(generations[2].len(), 25);
}

#[test]
fn test_cantor_dust_end_to_end() {
    let grammar = GrammarBuilder::new()
        .variables("AB")
        .axiom("A")
        .rule('A', "ABA")
        .rule('B', "BBB")
        .build()
        .unwrap();

    assert_eq!(grammar.generate(2)[2].to_string(), "ABABBBABA");
}

#[test]
fn test_generation_counts() {
    let grammar = GrammarBuilder::new()
        .variables("A")
        .axiom("A")
        .rule('A', "AA")
        .build()
        .unwrap();

    assert_eq!(grammar.generate(0).len(), 1);
    assert_eq!(grammar.generate(3).len(), 4);
    // Doubling rule: generation i has 2^i symbols
    assert_eq!(grammar.generate(6)[6].len(), 64);
}

#[test]
fn test_streaming_matches_collected() {
    let grammar = GrammarBuilder::new()
        .variables("XY")
        .constants("F+-")
        .axiom("FX")
        .rule('X', "X+YF+")
        .rule('Y', "-FX-Y")
        .build()
        .unwrap();

    let streamed: Vec<_> = grammar.generations(4).collect();
    assert_eq!(streamed, grammar.generate(4));
    assert_eq!(streamed[1].to_string(), "FX+YF+");
}

#[test]
fn test_observer_narration() {
    let grammar = GrammarBuilder::new()
        .variables("AB")
        .axiom("A")
        .rule('A', "AB")
        .rule('B', "A")
        .build()
        .unwrap();

    let mut narrator = Narrator::new(Vec::new());
    let final_state = grammar.generate_with(2, &mut narrator);

    assert_eq!(final_state.to_string(), "ABA");
    let output = String::from_utf8(narrator.into_inner()).unwrap();
    assert_eq!(output, "n=0 : A\nn=1 : AB\nn=2 : ABA\n");
}

#[test]
fn test_recorder_sees_every_generation() {
    let grammar = GrammarBuilder::new()
        .variables("A")
        .axiom("A")
        .rule('A', "AA")
        .build()
        .unwrap();

    let mut recorder = Recorder::new();
    grammar.generate_with(3, &mut recorder);

    assert_eq!(
        strings(recorder.generations()),
        vec!["A", "AA", "AAAA", "AAAAAAAA"]
    );
}

#[test]
fn test_duplicate_predecessor_rejected() {
    let result = Grammar::new(
        Alphabet::new("AB", ""),
        Axiom::from("A"),
        vec![Rule::new('A', "AB"), Rule::new('B', "A"), Rule::new('A', "B")],
    );

    assert!(matches!(
        result,
        Err(GrammarError::DuplicatePredecessor(_))
    ));
}

#[test]
fn test_unknown_symbols_rejected() {
    let axiom_result = Grammar::new(Alphabet::new("A", ""), Axiom::from("AX"), vec![]);
    assert!(matches!(
        axiom_result,
        Err(GrammarError::InvalidAxiomSymbol { .. })
    ));

    let rule_result = Grammar::new(
        Alphabet::new("A", ""),
        Axiom::from("A"),
        vec![Rule::new('A', "AX")],
    );
    assert!(matches!(
        rule_result,
        Err(GrammarError::InvalidRuleSymbol { .. })
    ));
}

#[test]
fn test_load_from_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plant.lsys");

    // Test that comments are ignored too.
    let definition = r#"
       # Fractal plant
       variables: X F
       constants: + - [ ]
       axiom: X
       X -> F-[[X]+X]+F[+FX]-X
       F -> FF
       "#;

    {
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(definition.as_bytes()).unwrap();
    }

    let grammar = Grammar::from_file(&path).unwrap();
    assert_eq!(grammar.rules().len(), 2);
    assert_eq!(
        grammar.generate(1)[1].to_string(),
        "F-[[X]+X]+F[+FX]-X"
    );
}

#[test]
fn test_load_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cantor.json");

    let definition = r#"{
        "name": "Cantor dust",
        "variables": "AB",
        "axiom": "A",
        "rules": [
            { "predecessor": "A", "successor": "ABA" },
            { "predecessor": "B", "successor": "BBB" }
        ]
    }"#;

    fs::write(&path, definition).unwrap();

    let grammar = GrammarDefinition::from_json_file(&path)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(grammar.generate(2)[2].to_string(), "ABABBBABA");
}

#[test]
fn test_definition_rejects_bad_grammar() {
    let definition = GrammarDefinition::from_json_str(
        r#"{
            "variables": "A",
            "axiom": "A",
            "rules": [
                { "predecessor": "A", "successor": "AB" }
            ]
        }"#,
    )
    .unwrap();

    // 'B' is not in the alphabet; building must fail eagerly
    assert!(matches!(
        definition.build(),
        Err(GrammarError::InvalidRuleSymbol { .. })
    ));
}

#[test]
fn test_shared_read_only_across_threads() {
    let grammar = GrammarBuilder::new()
        .variables("AB")
        .axiom("A")
        .rule('A', "AB")
        .rule('B', "A")
        .build()
        .unwrap();

    let expected = grammar.generate(8);
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| grammar.generate(8)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}
