//! Route finding over a road map.

use anyhow::Error;

use std::fmt;

use searcher::graph::{self, Graph};
use searcher::{Action, Cost, Problem, Solution};

use crate::runner;
use crate::{Settings, UninformedError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub fn new<S: Into<String>>(name: S) -> Location {
        Location(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Travel from one location to another along the roads of a map.
#[derive(Debug)]
pub struct Navigation {
    map: Graph<Location>,
    origin: Location,
    destination: Location,
}

impl Navigation {
    pub fn new(map: Graph<Location>, origin: Location, destination: Location) -> Self {
        Navigation {
            map,
            origin,
            destination,
        }
    }

    pub fn map(&self) -> &Graph<Location> {
        &self.map
    }
}

impl Problem for Navigation {
    type State = Location;

    fn initial_state(&self) -> Location {
        self.origin.clone()
    }

    fn successors(&self, location: &Location) -> Vec<Action<Location>> {
        self.map
            .neighbors(location)
            .iter()
            .map(|road| Action::new("go", road.destination().clone(), road.cost()))
            .collect()
    }

    fn is_goal(&self, location: &Location) -> bool {
        location == &self.destination
    }
}

/// Roads between the cities of Romania, with distances in km.
const ROADS: [(&str, &str, f64); 16] = [
    ("Oradea", "Zerind", 71.0),
    ("Oradea", "Sibiu", 151.0),
    ("Zerind", "Arad", 75.0),
    ("Arad", "Sibiu", 140.0),
    ("Arad", "Timisoara", 118.0),
    ("Timisoara", "Lugoj", 111.0),
    ("Lugoj", "Mehadia", 70.0),
    ("Mehadia", "Dobreta", 75.0),
    ("Dobreta", "Craiova", 120.0),
    ("Craiova", "RimnicuVilcea", 146.0),
    ("Craiova", "Pitesti", 138.0),
    ("RimnicuVilcea", "Sibiu", 146.0),
    ("RimnicuVilcea", "Pitesti", 97.0),
    ("Sibiu", "Fagaras", 99.0),
    ("Fagaras", "Bucharest", 211.0),
    ("Pitesti", "Bucharest", 101.0),
];

fn map<'r, I>(roads: I) -> Result<Graph<Location>, Error>
where
    I: IntoIterator<Item = &'r (&'r str, &'r str, f64)>,
{
    let mut builder = graph::builder();
    for &(one, other, distance) in roads {
        builder.insert_bidirectional(
            Location::new(one),
            Location::new(other),
            Cost::new(distance)?,
        );
    }
    Ok(builder.build())
}

pub fn romania() -> Result<Graph<Location>, Error> {
    map(ROADS.iter())
}

fn location(map: &Graph<Location>, name: &str) -> Result<Location, UninformedError> {
    let location = Location::new(name);
    if map.contains(&location) {
        Ok(location)
    } else {
        Err(UninformedError::UnknownLocation(name.to_string()))
    }
}

fn describe(solution: &Solution<Location>) -> String {
    let mut output = String::new();
    for action in solution {
        if action.is_none() {
            output.push_str(&format!("Start at {}\n", action.target()));
        } else {
            output.push_str(&format!(
                "{} to {} ({})\n",
                action.name(),
                action.target(),
                action.cost()
            ));
        }
    }
    output
}

pub(crate) fn main(settings: &Settings) -> Result<(), Error> {
    let map = romania()?;
    let origin = location(&map, settings.from.as_deref().unwrap_or("Arad"))?;
    let destination = location(&map, settings.to.as_deref().unwrap_or("Bucharest"))?;

    let navigation = Navigation::new(map, origin, destination);
    println!("Initial state\n{}\n", navigation.initial_state());

    for report in runner::race(&navigation, &settings.strategies)? {
        println!("{}", report);
        if let Some(solution) = report.solution() {
            println!("{}", describe(solution));
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use searcher::{bfs, dfs, Strategy};

    use std::collections::HashSet;

    const SHORT_ROADS: [(&str, &str, f64); 6] = [
        ("Arad", "Sibiu", 140.0),
        ("Sibiu", "Fagaras", 99.0),
        ("Fagaras", "Bucharest", 211.0),
        ("Sibiu", "RimnicuVilcea", 146.0),
        ("RimnicuVilcea", "Pitesti", 97.0),
        ("Pitesti", "Bucharest", 101.0),
    ];

    fn trip(roads: &[(&str, &str, f64)], from: &str, to: &str) -> Navigation {
        Navigation::new(
            map(roads.iter()).unwrap(),
            Location::new(from),
            Location::new(to),
        )
    }

    fn names(solution: &Solution<Location>) -> Vec<&str> {
        solution.states().map(|l| l.name()).collect()
    }

    #[test]
    fn bfs_arad_to_bucharest() {
        let problem = trip(&SHORT_ROADS, "Arad", "Bucharest");
        let solution = bfs(&problem).unwrap().unwrap();

        assert_eq!(solution.steps(), 3);
        assert_eq!(
            names(&solution),
            vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]
        );
        assert_eq!(solution.cost(), Cost::new(450.0).unwrap());
    }

    #[test]
    fn every_strategy_arrives() {
        let problem = trip(&ROADS, "Arad", "Bucharest");
        for strategy in Strategy::ALL.iter() {
            let solution = strategy.solve(&problem).unwrap().unwrap();
            assert_eq!(solution.goal(), &Location::new("Bucharest"), "{}", strategy);
            assert_eq!(solution.origin(), &Location::new("Arad"));

            // Each step follows a road on the map.
            let states: Vec<&Location> = solution.states().collect();
            for (pair, action) in states.windows(2).zip(solution.iter().skip(1)) {
                assert_eq!(
                    problem.map().cost_between(pair[0], pair[1]),
                    Some(action.cost())
                );
            }
        }
    }

    #[test]
    fn bfs_on_full_map() {
        let problem = trip(&ROADS, "Arad", "Bucharest");
        let solution = bfs(&problem).unwrap().unwrap();
        assert_eq!(
            names(&solution),
            vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]
        );
    }

    #[test]
    fn depth_first_variants_agree_on_order() {
        let problem = trip(&SHORT_ROADS, "Arad", "Pitesti");
        let iterative = dfs(&problem).unwrap().unwrap();
        let recursive = dfs::recursive(&problem).unwrap();

        assert_eq!(iterative.goal(), recursive.goal());
        assert_eq!(iterative.steps(), recursive.steps());
    }

    #[test]
    fn unreachable_destination() {
        let mut roads = SHORT_ROADS.to_vec();
        roads.push(("Oradea", "Zerind", 71.0));
        let problem = trip(&roads, "Arad", "Zerind");

        let outcome = bfs::build(&problem).run().unwrap();
        assert!(!outcome.is_solved());

        let reachable: HashSet<Location> = [
            "Arad",
            "Sibiu",
            "Fagaras",
            "Bucharest",
            "RimnicuVilcea",
            "Pitesti",
        ]
        .iter()
        .map(|&n| Location::new(n))
        .collect();
        assert_eq!(outcome.closed(), &reachable);

        assert!(dfs(&problem).unwrap().is_none());
        assert!(dfs::recursive(&problem).is_none());
    }

    #[test]
    fn unknown_start_has_no_roads() {
        let problem = trip(&SHORT_ROADS, "Atlantis", "Bucharest");
        assert!(problem.successors(&Location::new("Atlantis")).is_empty());
        assert!(bfs(&problem).unwrap().is_none());
    }

    #[test]
    fn one_way_roads() {
        let mut builder = graph::builder();
        builder.insert(Location::new("A"), Location::new("B"), Cost::UNIFORM);
        let problem = Navigation::new(builder.build(), Location::new("B"), Location::new("A"));
        assert!(bfs(&problem).unwrap().is_none());
    }

    #[test]
    fn locations() {
        let map = romania().unwrap();
        assert_eq!(map.len(), 13);
        assert_eq!(location(&map, "Sibiu").unwrap(), Location::new("Sibiu"));
        assert_eq!(
            location(&map, "Paris"),
            Err(UninformedError::UnknownLocation("Paris".to_string()))
        );
    }

    #[test]
    fn describe_route() {
        let problem = trip(&SHORT_ROADS, "Arad", "Sibiu");
        let solution = bfs(&problem).unwrap().unwrap();
        assert_eq!(describe(&solution), "Start at Arad\ngo to Sibiu (140)\n");
    }
}
