use clap::{App, load_yaml};

use color_bench::{catalog, error::Error, instance::InstanceRecord};

/** prints, for each catalog row, the number of vertices of degree below a threshold */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("instance_stats.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let catalog_filename = main_args.value_of("catalog").unwrap();
    let threshold:usize = main_args.value_of("threshold").unwrap().parse::<usize>()
        .expect("unable to parse the threshold given");
    if let Err(e) = run(catalog_filename, threshold) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(catalog_filename:&str, threshold:usize) -> Result<(), Error> {
    for row in catalog::read_from_file(catalog_filename)? {
        // a broken row does not stop the remaining rows
        match InstanceRecord::from_file(&row.path) {
            Ok(instance) => {
                let nb = instance.degrees().iter().filter(|d| **d < threshold).count();
                println!("{}", nb);
            }
            Err(e) => eprintln!("{}: {}", row.name, e),
        }
    }
    Ok(())
}
