use clap::{App, load_yaml};

use color_bench::{catalog, error::Error, instance::InstanceRecord};

/** dumps each instance's best known coloring to a solution file and prints its color count */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("extract_colorings.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let catalog_filename = main_args.value_of("catalog").unwrap();
    let out_dir = main_args.value_of("outdir").unwrap();
    if let Err(e) = run(catalog_filename, out_dir) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(catalog_filename:&str, out_dir:&str) -> Result<(), Error> {
    for row in catalog::read_from_file(catalog_filename)? {
        let instance = match InstanceRecord::from_file(&row.path) {
            Ok(instance) => instance,
            Err(e) => {
                eprintln!("{}: {}", row.name, e);
                continue;
            }
        };
        match instance.coloring() {
            Some(coloring) => {
                println!("{}", coloring.num_colors());
                let sol_filename = format!("{}/{}.solution.json", out_dir, row.name);
                coloring.write_to_file(&sol_filename)?;
            }
            None => eprintln!("{}: no stored coloring", row.name),
        }
    }
    Ok(())
}
