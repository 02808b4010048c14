//! `poisson`: relax the 3D Poisson equation and print the middle z-slice.

mod args;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;

use poisson_solver::{solve, Solution};
use poisson_source::{build_source, SourceDefaults, SourceFile};

use crate::args::{Args, Command, USAGE};

fn init_logging(debug: bool) {
    let default_filter = if debug { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Write the rows of the middle z-slice, each value followed by a space.
fn print_middle_slice<W: Write>(out: &mut W, solution: &Solution) -> io::Result<()> {
    for row in solution.middle_slice() {
        for v in row {
            write!(out, "{v:.5} ")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

fn run(args: &Args) -> Result<()> {
    let file = args
        .source
        .as_deref()
        .map(SourceFile::open)
        .transpose()
        .context("could not open source coordinate file")?;

    let config = args.solver_config();
    let cube = config.validate().context("invalid solver configuration")?;
    let source = build_source(&cube, file, &SourceDefaults::default())
        .context("could not build source field")?;

    let solution = solve(&config, &source)?;
    info!(
        "solved n = {} in {} us ({} bytes of state)",
        cube.edge(),
        solution.metrics().total_us,
        solution.metrics().memory_bytes
    );

    let stdout = io::stdout();
    print_middle_slice(&mut BufWriter::new(stdout.lock()), &solution)
        .context("could not write result")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match args::parse(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(args)) => args,
        Err(e) => {
            eprintln!("poisson: {e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.debug);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poisson_solver::SolverConfig;

    #[test]
    fn middle_slice_formatting() {
        let config = SolverConfig {
            n: 3,
            iterations: 1,
            ..Default::default()
        };
        let mut source = vec![0.0; 27];
        source[13] = 1.0;
        let solution = solve(&config, &source).unwrap();
        let mut out = Vec::new();
        print_middle_slice(&mut out, &solution).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "-2.00000 -0.16667 1.00000 \n\
             -2.00000 -0.33333 1.00000 \n\
             -2.00000 -0.16667 1.00000 \n"
        );
    }
}
