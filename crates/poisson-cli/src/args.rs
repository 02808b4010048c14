//! Command-line parsing.
//!
//! Short options in the POSIX `getopt` style: `-n`, `-i`, `-s` and `-t`
//! take a value either attached (`-n7`) or as the next argument (`-n 7`);
//! `-d` and `-h` take none and may be grouped (`-dn7`). `--` ends option
//! parsing. Operands are ignored.

use std::fmt;
use std::path::PathBuf;

use poisson_solver::SolverConfig;

/// Usage line printed for `-h` and on parse errors.
pub const USAGE: &str =
    "Usage: poisson [-n size] [-s source-coordinates-file] [-i iterations] [-t threads] [-d] (for debug mode)";

/// Options for one run of the solver.
#[derive(Clone, Debug, PartialEq)]
pub struct Args {
    /// Cube edge length.
    pub n: usize,
    /// Number of sweeps.
    pub iterations: u32,
    /// Source-coordinate file; `None` uses the default centre point.
    pub source: Option<PathBuf>,
    /// Worker threads.
    pub threads: usize,
    /// Report progress at `info` level.
    pub debug: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            n: SolverConfig::DEFAULT_N,
            iterations: SolverConfig::DEFAULT_ITERATIONS,
            source: None,
            threads: 1,
            debug: false,
        }
    }
}

impl Args {
    /// Solver configuration for these options.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            n: self.n,
            iterations: self.iterations,
            threads: self.threads,
            debug: self.debug,
            ..Default::default()
        }
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Print usage and exit successfully.
    Help,
    /// Solve with the given options.
    Run(Args),
}

/// Errors in the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgsError {
    /// An option letter that is not recognised.
    UnknownOption(char),
    /// An option that needs a value was last on the command line.
    MissingValue(char),
    /// An option value that is not a valid number.
    InvalidValue {
        /// The option letter.
        option: char,
        /// The value as given.
        value: String,
    },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption(c) => write!(f, "invalid option -- '{c}'"),
            Self::MissingValue(c) => write!(f, "option requires an argument -- '{c}'"),
            Self::InvalidValue { option, value } => {
                write!(f, "invalid value {value:?} for option -{option}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn number<T: std::str::FromStr>(option: char, value: &str) -> Result<T, ArgsError> {
    value.trim().parse().map_err(|_| ArgsError::InvalidValue {
        option,
        value: value.to_string(),
    })
}

/// Parse the arguments following the program name.
pub fn parse<I, S>(argv: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = Args::default();
    let mut argv = argv.into_iter().map(Into::into);

    while let Some(arg) = argv.next() {
        if arg == "--" {
            break;
        }
        let Some(flags) = arg.strip_prefix('-').filter(|f| !f.is_empty()) else {
            continue;
        };

        for (pos, option) in flags.char_indices() {
            match option {
                'h' => return Ok(Command::Help),
                'd' => args.debug = true,
                'n' | 'i' | 's' | 't' => {
                    let attached = &flags[pos + option.len_utf8()..];
                    let value = if attached.is_empty() {
                        argv.next().ok_or(ArgsError::MissingValue(option))?
                    } else {
                        attached.to_string()
                    };
                    match option {
                        'n' => args.n = number(option, &value)?,
                        'i' => args.iterations = number(option, &value)?,
                        't' => args.threads = number(option, &value)?,
                        _ => args.source = Some(PathBuf::from(value)),
                    }
                    break;
                }
                other => return Err(ArgsError::UnknownOption(other)),
            }
        }
    }
    Ok(Command::Run(args))
}
