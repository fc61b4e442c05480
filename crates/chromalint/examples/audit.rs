#![allow(clippy::print_stdout)]

use chromalint::{
    test_contrast, validate_color_distinction, ContrastOptions, DistinctionOptions,
};

/// The default palette, which has two nearly identical blues.
const PALETTE: [&str; 5] = ["#1f77b4", "#1f78b5", "#ff7f0e", "rgb(44, 160, 44)", "crimson"];

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Colors given on the command line replace the default palette.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let palette: Vec<&str> = if args.is_empty() {
        PALETTE.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let options = ContrastOptions::default();
    for color in &palette {
        let result = test_contrast(color, "white", &options);
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    let result = validate_color_distinction(palette.as_slice(), &DistinctionOptions::default());
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
