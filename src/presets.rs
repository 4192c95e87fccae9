//! The classic L-systems, available by name for the CLI and as ready-made
//! grammars for library callers. Each is a fixed, well-known definition;
//! construction cannot fail.

use crate::grammar::{Grammar, GrammarBuilder};

/// Names accepted by [`preset`], in presentation order
pub const PRESET_NAMES: &[&str] = &[
    "algae",
    "pythagoras-tree",
    "cantor-dust",
    "koch-curve",
    "sierpinski-triangle",
    "sierpinski-triangle-alt",
    "dragon-curve",
    "fractal-plant",
];

/// Look up a built-in system by name
pub fn preset(name: &str) -> Option<Grammar> {
    match name {
        "algae" => Some(algae()),
        "pythagoras-tree" => Some(pythagoras_tree()),
        "cantor-dust" => Some(cantor_dust()),
        "koch-curve" => Some(koch_curve()),
        "sierpinski-triangle" => Some(sierpinski_triangle()),
        "sierpinski-triangle-alt" => Some(sierpinski_triangle_alt()),
        "dragon-curve" => Some(dragon_curve()),
        "fractal-plant" => Some(fractal_plant()),
        _ => None,
    }
}

/// Lindenmayer's original system modeling algae growth
pub fn algae() -> Grammar {
    GrammarBuilder::new()
        .variables("AB")
        .axiom("A")
        .rule('A', "AB")
        .rule('B', "A")
        .build()
        .expect("algae definition is well-formed")
}

/// The Pythagoras tree, with `[`/`]` as push/pop markers for the renderer
pub fn pythagoras_tree() -> Grammar {
    GrammarBuilder::new()
        .variables("01")
        .constants("[]")
        .axiom("0")
        .rule('1', "11")
        .rule('0', "1[0]0")
        .build()
        .expect("pythagoras tree definition is well-formed")
}

/// The Cantor set, drawn as a line with gaps
pub fn cantor_dust() -> Grammar {
    GrammarBuilder::new()
        .variables("AB")
        .axiom("A")
        .rule('A', "ABA")
        .rule('B', "BBB")
        .build()
        .expect("cantor dust definition is well-formed")
}

/// The quadratic Koch curve
pub fn koch_curve() -> Grammar {
    GrammarBuilder::new()
        .variables("F")
        .constants("+-")
        .axiom("F")
        .rule('F', "F+F-F-F+F")
        .build()
        .expect("koch curve definition is well-formed")
}

/// The Sierpinski triangle
pub fn sierpinski_triangle() -> Grammar {
    GrammarBuilder::new()
        .variables("AB")
        .constants("+-")
        .axiom("A")
        .rule('A', "+B-A-B+")
        .rule('B', "-A+B+A-")
        .build()
        .expect("sierpinski triangle definition is well-formed")
}

/// An alternative Sierpinski triangle with two drawing symbols
pub fn sierpinski_triangle_alt() -> Grammar {
    GrammarBuilder::new()
        .variables("FG")
        .constants("+-")
        .axiom("F-G-G")
        .rule('F', "F-G+F+G-F")
        .rule('G', "GG")
        .build()
        .expect("sierpinski triangle (alt) definition is well-formed")
}

/// The Heighway dragon curve
pub fn dragon_curve() -> Grammar {
    GrammarBuilder::new()
        .variables("XY")
        .constants("F+-")
        .axiom("FX")
        .rule('X', "X+YF+")
        .rule('Y', "-FX-Y")
        .build()
        .expect("dragon curve definition is well-formed")
}

/// A branching fractal plant
pub fn fractal_plant() -> Grammar {
    GrammarBuilder::new()
        .variables("XF")
        .constants("+-[]")
        .axiom("X")
        .rule('X', "F-[[X]+X]+F[+FX]-X")
        .rule('F', "FF")
        .build()
        .expect("fractal plant definition is well-formed")
}
