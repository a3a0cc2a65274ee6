use std::rc::Rc;

use clap::ArgMatches;
use serde_json::Value;

use crate::dimacs;
use crate::graph::{Instance, VertexId};
use crate::stability::checker;

/** reads command line input and returns the instance name, the instance, the
stability parameter s, the time limit, solution_filename, stats_filename */
pub fn read_params(main_args:ArgMatches) -> (String, Rc<Instance>, usize, f32, Option<String>, Option<String>) {
    let inst_filename = main_args.value_of("instance").unwrap();
    let s:usize = main_args.value_of("stability").unwrap().parse::<usize>()
        .expect("unable to parse the stability parameter given");
    let t:f32 = main_args.value_of("time").unwrap().parse::<f32>()
        .expect("unable to parse the time given");
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    // read instance file
    let instance:Rc<Instance> = Rc::new(Instance::from_file(inst_filename));
    instance.display_statistics();
    println!("\t{} \t stability parameter", s);
    println!("=======================");
    (inst_filename.to_string(), instance, s, t, sol_file, perf_file)
}

/// exports search results to files
pub fn export_results(
    instance:Rc<Instance>,
    s:usize,
    solution:&[VertexId],
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
    check_result:bool,
) {
    // export statistics
    match perf_file {
        None => {},
        Some(filename) => {
            let mut file = match std::fs::File::create(filename.as_str()) {
                Err(why) => panic!("couldn't create {}: {}", filename, why),
                Ok(file) => file
            };
            if let Err(why) = std::io::Write::write(
                &mut file, serde_json::to_string(stats).unwrap().as_bytes()
            ) { panic!("couldn't write: {}",why) };
        }
    }
    // export solution
    match sol_file {
        None => {},
        Some(filename) => {
            if check_result {
                match checker(&instance, solution, s) {
                    Some(_) => {},
                    None => { println!("invalid solution (not a {}-stable set)", s) }
                };
            }
            dimacs::write_solution(filename.as_str(), solution);
        }
    }
}
