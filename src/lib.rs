#![deny(clippy::all)]

use clap::{value_t, App, AppSettings, Arg, ArgMatches};

use lazy_static::lazy_static;
use log::debug;
use thiserror::Error;

use std::collections::HashMap;

use searcher::Strategy;

pub mod puzzles;
pub mod runner;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(&Settings) -> Result<(), Error>) + Send + Sync + 'static>;

macro_rules! problem {
    ($name:ident) => {
        (
            stringify!($name),
            Box::new(puzzles::$name::main) as Actor,
        )
    };
}

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Actor> = {
        let mut s: HashMap<&'static str, Actor> = HashMap::new();
        let problems: Vec<(&'static str, Actor)> = vec![problem!(navigation), problem!(npuzzle)];

        for (name, func) in problems.into_iter() {
            s.insert(name, func);
        }

        s
    };
}

const DEFAULT_STRATEGIES: [Strategy; 2] = [Strategy::BreadthFirst, Strategy::DepthFirst];

/// Everything the command line can configure.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub problem: String,
    pub strategies: Vec<Strategy>,
    pub verbosity: u64,

    /// Sliding puzzle board width.
    pub size: usize,
    pub seed: Option<u64>,
    pub board: Option<Vec<u32>>,

    pub from: Option<String>,
    pub to: Option<String>,
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Settings, UninformedError> {
        let problem = matches
            .value_of("problem")
            .unwrap_or_default()
            .to_lowercase();

        let strategies = match matches.values_of("strategy") {
            Some(values) => values
                .map(|v| {
                    v.parse::<Strategy>()
                        .map_err(|_| UninformedError::invalid("strategy", v))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => DEFAULT_STRATEGIES.to_vec(),
        };

        let size = if matches.is_present("size") {
            let value = matches.value_of("size");
            value_t!(matches, "size", usize).map_err(|_| UninformedError::invalid("size", value))?
        } else {
            3
        };

        let seed = match matches.value_of("seed") {
            Some(v) => Some(v.parse().map_err(|_| UninformedError::invalid("seed", v))?),
            None => None,
        };

        let board = match matches.value_of("board") {
            Some(v) => Some(
                v.split(',')
                    .map(|t| t.trim().parse())
                    .collect::<Result<Vec<u32>, _>>()
                    .map_err(|_| UninformedError::invalid("board", v))?,
            ),
            None => None,
        };

        Ok(Settings {
            problem,
            strategies,
            verbosity: matches.occurrences_of("verbose"),
            size,
            seed,
            board,
            from: matches.value_of("from").map(String::from),
            to: matches.value_of("to").map(String::from),
        })
    }

    fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

pub fn app() -> App<'static, 'static> {
    App::new("Uninformed search")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Solve problems with breadth-first and depth-first search")
        .setting(AppSettings::ColoredHelp)
        .arg(
            Arg::with_name("problem")
                .value_name("PROBLEM")
                .help("Problem to solve: navigation or npuzzle")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .help("Search to run: bfs, dfs or dfs-recursive. Repeat to race several")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("size")
                .short("n")
                .long("size")
                .value_name("SIZE")
                .help("Width of the sliding puzzle board")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed used to shuffle the sliding puzzle")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("board")
                .long("board")
                .value_name("TILES")
                .help("Sliding puzzle tiles in reading order, separated by commas")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("from")
                .long("from")
                .value_name("LOCATION")
                .help("Where navigation starts")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("to")
                .long("to")
                .value_name("LOCATION")
                .help("Where navigation ends")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for even more"),
        )
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    let settings = Settings::from_matches(&matches)?;

    let env = env_logger::Env::default().default_filter_or(settings.log_level());
    env_logger::Builder::from_env(env).init();
    debug!("{:?}", settings);

    solve(&settings)
}

pub fn solve(settings: &Settings) -> Result<(), Error> {
    match SOLVERS.get(settings.problem.as_str()) {
        None => Err(UninformedError::ProblemNotFound(settings.problem.clone()).into()),
        Some(actor) => actor(settings),
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum UninformedError {
    #[error("No problem named {0}")]
    ProblemNotFound(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("Location {0} is not on the map")]
    UnknownLocation(String),
}

impl UninformedError {
    fn invalid<'v, V: Into<Option<&'v str>>>(name: &'static str, value: V) -> Self {
        UninformedError::InvalidArgument {
            name,
            value: value.into().unwrap_or_default().to_string(),
        }
    }
}
