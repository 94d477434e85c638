//! Route query results.

use std::fmt;

use serde::Serialize;

use citynav_graph::Leg;

/// One hop of a route, distance in km.
pub type RouteLeg = Leg<String, u64>;

/// Outcome of a shortest route query.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RouteQuery {
    /// A route exists.
    Found(Route),

    /// No route: the cities are not connected, or one of them is unknown.
    Unreachable { start: String, end: String },
}

/// Shortest route between two cities.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Route {
    pub start: String,
    pub end: String,

    /// Sum of all leg weights.
    pub distance: u64,

    /// Legs from `start` to `end`, empty if they are the same city.
    pub legs: Vec<RouteLeg>,
}

/// Human-readable text of a query result, using the given distance unit.
pub struct Report<'a> {
    query: &'a RouteQuery,
    unit: &'a str,
}

impl RouteQuery {
    pub fn is_reachable(&self) -> bool {
        matches!(self, RouteQuery::Found(_))
    }

    pub fn distance(&self) -> Option<u64> {
        match self {
            RouteQuery::Found(route) => Some(route.distance),
            RouteQuery::Unreachable { .. } => None,
        }
    }

    /// Route legs, empty if unreachable.
    pub fn legs(&self) -> &[RouteLeg] {
        match self {
            RouteQuery::Found(route) => &route.legs,
            RouteQuery::Unreachable { .. } => &[],
        }
    }

    pub fn report<'a>(&'a self, unit: &'a str) -> Report<'a> {
        Report { query: self, unit }
    }
}

impl Route {
    /// First line of the text report.
    pub fn summary(&self, unit: &str) -> String {
        format!("Shortest distance from '{}' to '{}': {} {}.", self.start, self.end, self.distance, unit)
    }

    /// Text report line for a single leg.
    pub fn leg_line(leg: &RouteLeg, unit: &str) -> String {
        format!("{} -> {} ({} {})", leg.from, leg.to, leg.weight, unit)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.query {
            RouteQuery::Found(route) => {
                write!(f, "{}\nPath:", route.summary(self.unit))?;
                for leg in &route.legs {
                    write!(f, "\n{}", Route::leg_line(leg, self.unit))?;
                }
                Ok(())
            }
            RouteQuery::Unreachable { start, end } => write!(f, "'{}' is not reachable from '{}'.", end, start),
        }
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.report("km"), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(from: &str, to: &str, weight: u64) -> RouteLeg {
        Leg {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    fn found() -> RouteQuery {
        RouteQuery::Found(Route {
            start: "A".to_string(),
            end: "C".to_string(),
            distance: 8,
            legs: vec![leg("A", "B", 5), leg("B", "C", 3)],
        })
    }

    fn unreachable() -> RouteQuery {
        RouteQuery::Unreachable {
            start: "A".to_string(),
            end: "D".to_string(),
        }
    }

    #[test]
    fn test_accessors() {
        assert!(found().is_reachable());
        assert_eq!(found().distance(), Some(8));
        assert_eq!(found().legs().len(), 2);
        assert!(!unreachable().is_reachable());
        assert_eq!(unreachable().distance(), None);
        assert!(unreachable().legs().is_empty());
    }

    #[test]
    fn test_text_report() {
        assert_eq!(found().to_string(), "Shortest distance from 'A' to 'C': 8 km.\nPath:\nA -> B (5 km)\nB -> C (3 km)");
        assert_eq!(found().report("mi").to_string(), "Shortest distance from 'A' to 'C': 8 mi.\nPath:\nA -> B (5 mi)\nB -> C (3 mi)");
        assert_eq!(unreachable().to_string(), "'D' is not reachable from 'A'.");
    }

    #[test]
    fn test_json() {
        assert_eq!(
            serde_json::to_string(&found()).expect("serialize"),
            r#"{"status":"found","start":"A","end":"C","distance":8,"legs":[{"from":"A","to":"B","weight":5},{"from":"B","to":"C","weight":3}]}"#
        );
        assert_eq!(
            serde_json::to_string(&unreachable()).expect("serialize"),
            r#"{"status":"unreachable","start":"A","end":"D"}"#
        );
    }
}
