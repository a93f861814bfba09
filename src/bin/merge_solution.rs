use clap::{App, load_yaml};

use color_bench::{
    error::Error,
    instance::InstanceRecord,
    merge::{merge_coloring, MergeOutcome},
    solution::Coloring,
};

/** merges a solution file into its instance's best known coloring */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("merge_solution.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let sol_filename = main_args.value_of("solution").unwrap();
    let insts_dir = main_args.value_of("insts").unwrap();
    if let Err(e) = run(sol_filename, insts_dir) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(sol_filename:&str, insts_dir:&str) -> Result<(), Error> {
    // read the solution, then the instance it refers to
    let solution = Coloring::from_file(sol_filename)?;
    let inst_filename = format!("{}/{}.instance.json", insts_dir, solution.instance());
    let mut instance = InstanceRecord::from_file(&inst_filename)?;
    // merge, keeping only the better of the stored and new colorings
    let (outcome,stored_failure) = merge_coloring(&mut instance, &solution);
    if let Some(e) = stored_failure {
        println!("{}: stored coloring failed verification ({})", solution.instance(), e);
    }
    match outcome {
        MergeOutcome::Improved { previous, num_colors } => {
            instance.write_to_file(&inst_filename)?;
            let prev = match previous {
                Some(k) => k.to_string(),
                None => "{}".to_string(),
            };
            println!("{}: {} -> {}", solution.instance(), prev, num_colors);
        }
        MergeOutcome::NotBetter { .. } => {} // valid but not an improvement
        MergeOutcome::Invalid(e) => {
            println!("{}: invalid solution ({})", solution.instance(), e);
        }
    }
    Ok(())
}
