//! Navigation session.

use std::convert::TryFrom;

use log::{debug, warn};

use citynav_graph::{reconstruct_path, Graph, GraphBuilder, GraphSolver};

use crate::errors::ValidationError;
use crate::route::{Route, RouteQuery};

/// One navigation session: a graph of city connections that only grows.
///
/// Single owner, no internal locking. Wrap it in a lock if it has to be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    graph: Graph<String, u64>,
}

impl Navigator {
    /// Create new session with no cities.
    pub fn new() -> Self {
        Navigator { graph: Graph::new() }
    }

    /// Add an undirected connection between two cities.
    /// Distance is user input and must parse as an integer; surrounding whitespace is ignored.
    /// Returns the distance as stored.
    pub fn add_connection(&mut self, city_a: &str, city_b: &str, distance_km: &str) -> Result<u64, ValidationError> {
        let distance_km = parse_distance(distance_km)?;
        self.add_connection_km(city_a, city_b, distance_km)
    }

    /// Same as [`add_connection`](Self::add_connection) for an already parsed distance.
    pub fn add_connection_km(&mut self, city_a: &str, city_b: &str, distance_km: i64) -> Result<u64, ValidationError> {
        let city_a = city_name(city_a)?;
        let city_b = city_name(city_b)?;
        let weight = check_distance(distance_km)?;

        debug!("adding connection [{}] -- [{}] {}", city_a, city_b, weight);
        self.graph.add_edge(city_a.to_string(), city_b.to_string(), weight);
        Ok(weight)
    }

    /// Shortest route between two cities, computed from scratch.
    /// Cities never added to the session are unreachable, even from themselves.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> RouteQuery {
        let start = start.trim().to_string();
        let end = end.trim().to_string();

        if !self.graph.contains(&start) || !self.graph.contains(&end) {
            debug!("route [{}] -> [{}]: unknown city", start, end);
            return RouteQuery::Unreachable { start, end };
        }

        let tree = self.graph.shortest_paths(&start);
        let distance = match tree.distance(&end) {
            Some(distance) => distance,
            None => {
                debug!("route [{}] -> [{}]: not connected", start, end);
                return RouteQuery::Unreachable { start, end };
            }
        };

        match reconstruct_path(&self.graph, &tree, &end) {
            Ok(legs) => {
                debug!("route [{}] -> [{}]: {} in {} legs", start, end, distance, legs.len());
                RouteQuery::Found(Route { start, end, distance, legs })
            }
            Err(err) => {
                // Tree was computed on this very graph, so this is a bug
                warn!("route [{}] -> [{}]: {}", start, end, err);
                RouteQuery::Unreachable { start, end }
            }
        }
    }

    /// Known city names, sorted.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities = self.graph.nodes().map(String::as_str).collect::<Vec<_>>();
        cities.sort_unstable();
        cities
    }

    pub fn city_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn city_name(s: &str) -> Result<&str, ValidationError> {
    let s = s.trim();
    if s.is_empty() {
        Err(ValidationError::EmptyCityName)
    } else {
        Ok(s)
    }
}

fn parse_distance(s: &str) -> Result<i64, ValidationError> {
    let s = s.trim();
    s.parse().map_err(|_| ValidationError::NotAnInteger(s.to_string()))
}

/// Negative weights would break the search, zero is fine.
/// The upper bound keeps any sum of weights within `u64`.
fn check_distance(distance_km: i64) -> Result<u64, ValidationError> {
    if distance_km < 0 {
        return Err(ValidationError::NegativeDistance(distance_km));
    }
    u32::try_from(distance_km)
        .map(u64::from)
        .map_err(|_| ValidationError::DistanceTooLarge(distance_km))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("42"), Ok(42));
        assert_eq!(parse_distance(" 42 "), Ok(42));
        assert_eq!(parse_distance("+7"), Ok(7));
        assert_eq!(parse_distance("-3"), Ok(-3));
        assert_eq!(parse_distance("abc"), Err(ValidationError::NotAnInteger("abc".to_string())));
        assert_eq!(parse_distance("4.5"), Err(ValidationError::NotAnInteger("4.5".to_string())));
        assert_eq!(parse_distance(""), Err(ValidationError::NotAnInteger("".to_string())));
        assert_eq!(parse_distance("99999999999999999999"), Err(ValidationError::NotAnInteger("99999999999999999999".to_string())));
    }

    #[test]
    fn test_check_distance() {
        assert_eq!(check_distance(0), Ok(0));
        assert_eq!(check_distance(300), Ok(300));
        assert_eq!(check_distance(u32::MAX as i64), Ok(u32::MAX as u64));
        assert_eq!(check_distance(-1), Err(ValidationError::NegativeDistance(-1)));
        assert_eq!(check_distance(u32::MAX as i64 + 1), Err(ValidationError::DistanceTooLarge(u32::MAX as i64 + 1)));
    }

    #[test]
    fn test_city_name() {
        assert_eq!(city_name("Krakow"), Ok("Krakow"));
        assert_eq!(city_name("  Nowa Huta "), Ok("Nowa Huta"));
        assert_eq!(city_name(""), Err(ValidationError::EmptyCityName));
        assert_eq!(city_name(" \t"), Err(ValidationError::EmptyCityName));
    }
}
