//! A command line interface to the test case prioritization solver.

use clap::ArgMatches;
use prio_cli::args::{get_app, get_run_options};
use prio_cli::properties::read_properties;
use prio_cli::suite::read_suite;
use prio_core::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::process;
use std::sync::Arc;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> GenericResult<()> {
    let options = get_run_options(matches)?;

    let properties = read_properties(open(&options.config_path)?)?;
    let tests = read_suite(open(&options.suite_path)?)?;
    let config = SearchConfig::parse(&properties)?;

    let environment = Arc::new(match options.seed {
        Some(seed) => Environment::new_with_seed(seed),
        None => Environment::default(),
    });

    (environment.logger)(&format!("loaded {} tests from {}", tests.len(), options.suite_path));

    let search = create_search(options.search_kind, environment.clone());

    if options.benchmark {
        search.benchmark(&config, &tests)?;
        return Ok(());
    }

    let result = search.search(&config, &tests)?;
    report_result(&environment, &result);

    if let Some(path) = &options.out_result {
        write_result_summary(path, &result)?;
    }

    Ok(())
}

fn open(path: &str) -> GenericResult<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|err| format!("cannot open {path}: {err}").into())
}

fn report_result(environment: &Environment, result: &SearchResult) {
    let logger = &environment.logger;
    let ordering = result.best().tests().iter().map(|test| test.name()).collect::<Vec<_>>().join(", ");

    (logger)(&format!("best ordering: [{ordering}]"));
    (logger)(&format!("fitness: {:.7}", result.fitness()));
    for (name, value) in result.counters() {
        (logger)(&format!("{name}: {value}"));
    }
}

#[derive(Serialize)]
struct ResultSummary<'a> {
    fitness: Float,
    tests: Vec<&'a str>,
    counters: Vec<(&'static str, usize)>,
}

fn write_result_summary(path: &str, result: &SearchResult) -> GenericResult<()> {
    let summary = ResultSummary {
        fitness: result.fitness(),
        tests: result.best().tests().iter().map(|test| test.name()).collect(),
        counters: result.counters(),
    };

    let file = File::create(path).map_err(|err| GenericError::from(format!("cannot write {path}: {err}")))?;

    serde_json::to_writer_pretty(file, &summary).map_err(|err| GenericError::from(err.to_string()))
}
