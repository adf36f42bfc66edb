use scaffold_core::presets::{Preset, DEFAULT, PRESETS};

use crate::output;

/// List the built-in presets with their descriptions.
pub fn run() {
    output::print_header("Built-in presets");
    for preset in PRESETS {
        output::print_key_value(preset.name, &describe(preset));
    }
    println!();
}

fn describe(preset: &Preset) -> String {
    if preset.name == DEFAULT {
        format!("{} (default)", preset.description)
    } else {
        preset.description.to_string()
    }
}
