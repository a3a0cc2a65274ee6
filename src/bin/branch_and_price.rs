use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use stabset::util::{read_params, export_results};
use stabset::search::branch_and_price::solve;

/** solves a maximum s-stable set problem using branch-and-price. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("branch_and_price.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (
        inst_filename,
        instance,
        s,
        t,
        sol_file,
        perf_file
    ) = read_params(main_args);

    // solve it
    let t_start = Instant::now();
    let result = solve(&instance, s, t);
    let duration = t_start.elapsed().as_secs_f32();
    println!(
        "branch-and-price took {:.3} seconds. Maximum {}-stable set size: {}{}",
        duration, s, result.size,
        if result.complete { "" } else { " (incomplete: time limit reached)" }
    );
    let stats = json!({
        "primal_list": vec![result.size],
        "is_complete": result.complete,
        "nb_nodes": result.stats.nb_nodes,
        "nb_columns": result.stats.nb_columns,
        "nb_cg_iterations": result.stats.nb_cg_iterations,
        "time_searched": duration,
        "inst_name": inst_filename,
        "stability": s
    });

    // export results
    export_results(instance, s, &result.witness, &stats, perf_file, sol_file, true);
}
