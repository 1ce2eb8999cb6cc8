use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// One simple path from a queried source to a queried target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route<T> {
    nodes: Vec<T>,
}

impl<T> Route<T> {
    pub fn new(nodes: Vec<T>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<T> {
        self.nodes
    }

    /// Number of links traversed, one less than the node count
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&T> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&T> {
        self.nodes.last()
    }
}

impl<T> Deref for Route<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.nodes
    }
}

impl<T> From<Vec<T>> for Route<T> {
    fn from(nodes: Vec<T>) -> Self {
        Self::new(nodes)
    }
}

impl<T> IntoIterator for Route<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Route<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_display() {
        let route = Route::new(vec!["A", "B", "C"]);
        assert_eq!(route.to_string(), "A -> B -> C");
        assert_eq!(Route::new(vec!["A"]).to_string(), "A");
    }

    #[test]
    fn test_route_endpoints() {
        let route = Route::new(vec![1, 2, 3]);
        assert_eq!(route.source(), Some(&1));
        assert_eq!(route.target(), Some(&3));
        assert_eq!(route.hop_count(), 2);
        assert_eq!(route.len(), 3);
        assert!(route.contains(&2));
    }

    #[test]
    fn test_route_serializes_as_list() {
        let route = Route::new(vec!["A", "B"]);
        assert_eq!(serde_json::to_string(&route).unwrap(), r#"["A","B"]"#);
    }
}
