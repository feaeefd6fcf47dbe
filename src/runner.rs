//! Run several searches over the same problem side by side.

use anyhow::{anyhow, Error};
use log::info;

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use searcher::{Problem, Solution, Strategy};

/// Stack given to threads running the recursive depth-first search,
/// which needs a frame for every step along its current path.
const RECURSIVE_STACK_SIZE: usize = 256 * 1024 * 1024;

/// How a single strategy fared.
#[derive(Debug)]
pub struct Report<S> {
    pub strategy: Strategy,
    pub elapsed: Duration,
    pub result: Result<Option<Solution<S>>, Error>,
}

impl<S> Report<S> {
    pub fn solution(&self) -> Option<&Solution<S>> {
        self.result.as_ref().ok().and_then(|s| s.as_ref())
    }

    pub fn is_solved(&self) -> bool {
        self.solution().is_some()
    }
}

impl<S> fmt::Display for Report<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(solution) => write!(
                f,
                "{}: search finished, solution found: {} Time (ms): {}",
                self.strategy,
                solution.is_some(),
                self.elapsed.as_millis()
            )?,
            Err(e) => write!(f, "{}: search failed: {}", self.strategy, e)?,
        }
        if let Some(solution) = self.solution() {
            write!(
                f,
                " Steps: {} Cost: {}",
                solution.steps(),
                solution.cost()
            )?;
        }
        Ok(())
    }
}

fn run<P>(problem: &P, strategy: Strategy) -> Report<P::State>
where
    P: Problem,
{
    info!("{}: starting search", strategy);
    let start = Instant::now();
    let result = strategy.solve(problem).map_err(Error::from);
    let elapsed = start.elapsed();
    info!("{}: finished in {:?}", strategy, elapsed);

    Report {
        strategy,
        elapsed,
        result,
    }
}

/// Run each strategy on its own thread, and wait for all of them.
///
/// Every search builds its own frontier and closed set, so the only
/// thing shared between threads is the problem itself. Reports come back
/// in the order the strategies were given, whichever finishes first.
pub fn race<P>(problem: &P, strategies: &[Strategy]) -> Result<Vec<Report<P::State>>, Error>
where
    P: Problem + Sync,
    P::State: Send,
{
    thread::scope(|scope| -> Result<Vec<Report<P::State>>, Error> {
        let mut handles = Vec::with_capacity(strategies.len());

        for &strategy in strategies {
            let mut builder = thread::Builder::new().name(strategy.name().to_string());
            if strategy.is_recursive() {
                builder = builder.stack_size(RECURSIVE_STACK_SIZE);
            }
            let handle = builder.spawn_scoped(scope, move || run(problem, strategy))?;
            handles.push((strategy, handle));
        }

        Ok(handles
            .into_iter()
            .map(|(strategy, handle)| {
                handle.join().unwrap_or_else(|_| Report {
                    strategy,
                    elapsed: Duration::default(),
                    result: Err(anyhow!("{} panicked", strategy)),
                })
            })
            .collect())
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use searcher::{Action, Cost};

    #[derive(Debug)]
    struct Ladder(u32);

    impl Problem for Ladder {
        type State = u32;

        fn initial_state(&self) -> u32 {
            0
        }

        fn successors(&self, state: &u32) -> Vec<Action<u32>> {
            vec![
                Action::new("climb", state + 1, Cost::UNIFORM),
                Action::new("leap", state + 2, Cost::new(3.0).unwrap()),
            ]
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == self.0
        }
    }

    #[derive(Debug)]
    struct Fragile;

    impl Problem for Fragile {
        type State = u8;

        fn initial_state(&self) -> u8 {
            0
        }

        fn successors(&self, _state: &u8) -> Vec<Action<u8>> {
            panic!("no way forward")
        }

        fn is_goal(&self, _state: &u8) -> bool {
            false
        }
    }

    #[test]
    fn reports_in_order() {
        let strategies = [Strategy::DepthFirst, Strategy::BreadthFirst];
        let reports = race(&Ladder(6), &strategies).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].strategy, Strategy::DepthFirst);
        assert_eq!(reports[1].strategy, Strategy::BreadthFirst);
        assert!(reports.iter().all(|r| r.is_solved()));

        // Climbing only, since depth-first takes the first successor.
        assert_eq!(reports[0].solution().unwrap().steps(), 6);
        assert_eq!(reports[1].solution().unwrap().steps(), 3);
    }

    #[test]
    fn recursive_gets_a_deep_stack() {
        let reports = race(&Ladder(20_000), &[Strategy::DepthFirstRecursive]).unwrap();
        assert_eq!(reports[0].solution().unwrap().steps(), 20_000);
    }

    #[test]
    fn panics_are_reported() {
        let reports = race(&Fragile, &Strategy::ALL).unwrap();
        assert_eq!(reports.len(), 3);
        for report in reports {
            assert!(report.result.is_err());
            assert!(format!("{}", report).contains("panicked"));
        }
    }

    #[test]
    fn display() {
        let reports = race(&Ladder(2), &[Strategy::BreadthFirst]).unwrap();
        let text = format!("{}", reports[0]);
        assert!(text.starts_with("Breadth-first search: search finished, solution found: true"));
        assert!(text.ends_with("Steps: 1 Cost: 3"));
    }
}
