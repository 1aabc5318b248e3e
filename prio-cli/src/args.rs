//! Command line argument handling.

use clap::{Arg, ArgAction, ArgMatches, Command};
use prio_core::prelude::{GenericResult, SearchKind};

/// Builds the command line interface definition.
pub fn get_app() -> Command {
    Command::new("prio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to the test case prioritization solver")
        .arg(Arg::new("config").help("a path to the .properties configuration file").required(true).index(1))
        .arg(Arg::new("suite").help("a path to the test suite fault matrix file").required(true).index(2))
        .arg(
            Arg::new("search")
                .help("a search strategy to run: ga, hill or random")
                .short('s')
                .long("search")
                .default_value("ga"),
        )
        .arg(
            Arg::new("benchmark")
                .help("runs the benchmark mode instead of a single search")
                .short('b')
                .long("benchmark")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seed")
                .help("a seed for the random generator, making the run reproducible")
                .long("seed")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("out-result")
                .help("a path to write a json summary of the search result")
                .short('o')
                .long("out-result"),
        )
}

/// Options of a solver run extracted from matched arguments.
pub struct RunOptions {
    /// A path to the configuration file.
    pub config_path: String,
    /// A path to the test suite file.
    pub suite_path: String,
    /// A search strategy to run.
    pub search_kind: SearchKind,
    /// Whether to run the benchmark mode.
    pub benchmark: bool,
    /// An optional seed for the random generator.
    pub seed: Option<u64>,
    /// An optional path for the json result summary.
    pub out_result: Option<String>,
}

/// Extracts run options from matched arguments.
pub fn get_run_options(matches: &ArgMatches) -> GenericResult<RunOptions> {
    let config_path = matches.get_one::<String>("config").cloned().ok_or("config path is required")?;
    let suite_path = matches.get_one::<String>("suite").cloned().ok_or("suite path is required")?;
    let search_kind = matches.get_one::<String>("search").map(String::as_str).unwrap_or("ga").parse::<SearchKind>()?;

    Ok(RunOptions {
        config_path,
        suite_path,
        search_kind,
        benchmark: matches.get_flag("benchmark"),
        seed: matches.get_one::<u64>("seed").copied(),
        out_result: matches.get_one::<String>("out-result").cloned(),
    })
}
