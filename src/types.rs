use crate::graph::Route;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core types shared by the route finder CLI and report generation

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub target: String,
    pub link_count: usize,
    pub routes: Vec<Route<String>>,
}

impl RouteReport {
    pub fn new(source: String, target: String, link_count: usize, routes: Vec<Route<String>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            source,
            target,
            link_count,
            routes,
        }
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Hop count of the shortest route, if any route exists
    pub fn shortest_hops(&self) -> Option<usize> {
        self.routes.iter().map(Route::hop_count).min()
    }

    pub fn longest_hops(&self) -> Option<usize> {
        self.routes.iter().map(Route::hop_count).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_summary() {
        let report = RouteReport::new(
            "A".to_string(),
            "D".to_string(),
            4,
            vec![
                Route::new(vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()]),
                Route::new(vec!["A".to_string(), "C".to_string(), "D".to_string()]),
            ],
        );

        assert_eq!(report.route_count(), 2);
        assert_eq!(report.shortest_hops(), Some(2));
        assert_eq!(report.longest_hops(), Some(3));
    }

    #[test]
    fn test_empty_report_has_no_hops() {
        let report = RouteReport::new("A".to_string(), "Z".to_string(), 0, Vec::new());
        assert_eq!(report.shortest_hops(), None);
    }
}
