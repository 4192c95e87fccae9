use lsys_gen::presets;
use lsys_gen::utils::Narrator;
use std::io;

/// Walk through every built-in classic system, narrating a few generations
/// of each the way the turtle-graphics input is usually inspected.
fn main() {
    let mut stdout = io::stdout().lock();

    for name in presets::PRESET_NAMES {
        println!("\n{}", name);
        let grammar = presets::preset(name).expect("listed preset exists");

        let mut narrator = Narrator::new(&mut stdout);
        grammar.generate_with(3, &mut narrator);
    }
}
