use std::fs;

use clap::{App, load_yaml};

use color_bench::{
    bounds::{parse_bound, NO_BOUND},
    catalog,
    error::Error,
};

/** prints one "name,bound" CSV line per catalog row from solver output files */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("bounds_csv.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let catalog_filename = main_args.value_of("catalog").unwrap();
    let outputs_dir = main_args.value_of("outputs").unwrap();
    if let Err(e) = run(catalog_filename, outputs_dir) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(catalog_filename:&str, outputs_dir:&str) -> Result<(), Error> {
    for row in catalog::read_from_file(catalog_filename)? {
        let output_filename = format!("{}/{}.instance.json.output.json", outputs_dir, row.name);
        // a missing or malformed output file yields the no-bound value,
        // with a diagnostic, so the CSV stays complete
        let bound = match fs::read_to_string(&output_filename) {
            Ok(raw) => match parse_bound(&raw) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("{}: unable to parse {}: {}", row.name, output_filename, e);
                    NO_BOUND
                }
            },
            Err(e) => {
                eprintln!("{}: unable to read {}: {}", row.name, output_filename, e);
                NO_BOUND
            }
        };
        println!("{},{}", row.name, bound);
    }
    Ok(())
}
