use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use stabset::util::{read_params, export_results};
use stabset::search::rds::rds_search;

/** solves a maximum s-stable set problem using Russian Doll Search. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("rds.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (
        inst_filename,
        instance,
        s,
        _,
        sol_file,
        perf_file
    ) = read_params(main_args);

    // solve it
    let t_start = Instant::now();
    let solution = rds_search(&instance, s);
    let duration = t_start.elapsed().as_secs_f32();
    println!(
        "RDS took {:.3} seconds. Maximum {}-stable set size: {}",
        duration, s, solution.len()
    );
    let stats = json!({
        "primal_list": vec![solution.len()],
        "time_searched": duration,
        "inst_name": inst_filename,
        "stability": s
    });

    // export results
    export_results(instance, s, &solution, &stats, perf_file, sol_file, true);
}
