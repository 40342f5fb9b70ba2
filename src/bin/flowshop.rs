//! Command-line front end: solve every instance in a file and print the
//! best schedule and makespan found by each selected algorithm.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

use u_flowshop::batch::solve_all;
use u_flowshop::ga::GaConfig;
use u_flowshop::instance::parse_instances;
use u_flowshop::sa::SaConfig;
use u_flowshop::{FlowShopError, Instance, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Sa,
    Ga,
    Both,
}

#[derive(Parser, Debug)]
#[command(about = "Permutation flow-shop makespan minimization", long_about = None)]
struct Args {
    /// Instance file
    file: PathBuf,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = Algorithm::Both)]
    algorithm: Algorithm,

    /// Random seed (fresh seed per run when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// SA: steps per run
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// SA: initial temperature
    #[arg(long, default_value_t = 1000.0)]
    temperature: f64,

    /// SA: geometric cooling factor
    #[arg(long, default_value_t = 0.99)]
    cooling_rate: f64,

    /// GA: generations per run
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// GA: initial population size
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// GA: parents per generation
    #[arg(long, default_value_t = 20)]
    parents: usize,

    /// GA: offspring per generation
    #[arg(long, default_value_t = 30)]
    offspring: usize,

    /// GA: per-offspring swap mutation probability
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Log search progress
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(level: LevelFilter) {
    Builder::new()
        .filter(Some("u_flowshop"), level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn solvers(args: &Args) -> Vec<Box<dyn Solver>> {
    let mut sa = SaConfig::default()
        .with_initial_temperature(args.temperature)
        .with_cooling_rate(args.cooling_rate)
        .with_iteration_budget(args.iterations);
    let mut ga = GaConfig::default()
        .with_num_generations(args.generations)
        .with_population_size(args.population)
        .with_num_parents(args.parents)
        .with_num_offspring(args.offspring)
        .with_mutation_rate(args.mutation_rate);
    if let Some(seed) = args.seed {
        sa = sa.with_seed(seed);
        ga = ga.with_seed(seed);
    }

    let sa: Box<dyn Solver> = Box::new(sa);
    let ga: Box<dyn Solver> = Box::new(ga);
    match args.algorithm {
        Algorithm::Sa => vec![sa],
        Algorithm::Ga => vec![ga],
        Algorithm::Both => vec![sa, ga],
    }
}

fn load(path: &Path) -> Result<Vec<Instance>, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    parse_instances(&text).map_err(|e: FlowShopError| e.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let instances = match load(&args.file) {
        Ok(instances) => instances,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let solvers = solvers(&args);
    let results: Vec<_> = solvers
        .iter()
        .map(|solver| (solver.name(), solve_all(solver.as_ref(), &instances)))
        .collect();

    let mut failed = false;
    for (idx, instance) in instances.iter().enumerate() {
        let label = if instance.name().is_empty() {
            idx.to_string()
        } else {
            instance.name().to_string()
        };
        println!(
            "instance {label} ({} jobs, {} machines)",
            instance.jobs(),
            instance.machines()
        );
        for (name, per_instance) in &results {
            match &per_instance[idx] {
                Ok(solution) => {
                    println!("  {name}: schedule {:?}", solution.schedule);
                    println!("  {name}: makespan {}", solution.makespan);
                }
                Err(e) => {
                    println!("  {name}: {e}");
                    failed = true;
                }
            }
        }
        println!();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
