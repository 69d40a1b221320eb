use clap::Parser;

use nestegg::cli::{Cli, build_inputs};
use nestegg::core::run_plan;
use nestegg::output::print_plan;

fn main() {
    let cli = Cli::parse();
    let inputs = match build_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(msg) => {
            eprintln!("Error: {msg}");
            std::process::exit(2);
        }
    };

    let result = run_plan(&inputs);
    print_plan(&inputs, &result, cli.format);
}
