use serde::{Deserialize, Serialize};

/// A directed link between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link<T> {
    source: T,
    target: T,
}

impl<T> Link<T> {
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_parts(self) -> (T, T) {
        (self.source, self.target)
    }
}

impl<T: PartialEq> Link<T> {
    /// A link whose source and target are the same node
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<T> From<(T, T)> for Link<T> {
    fn from((source, target): (T, T)) -> Self {
        Self::new(source, target)
    }
}

/// Anything that can act as a directed edge of a graph.
///
/// A graph only ever asks an edge for its two endpoints, so callers can
/// keep edges in whatever shape they already have.
pub trait Edge {
    type Node;

    fn source(&self) -> &Self::Node;
    fn target(&self) -> &Self::Node;
}

impl<T> Edge for Link<T> {
    type Node = T;

    fn source(&self) -> &T {
        &self.source
    }

    fn target(&self) -> &T {
        &self.target
    }
}

impl<T> Edge for (T, T) {
    type Node = T;

    fn source(&self) -> &T {
        &self.0
    }

    fn target(&self) -> &T {
        &self.1
    }
}

impl<E: Edge> Edge for &E {
    type Node = E::Node;

    fn source(&self) -> &Self::Node {
        (**self).source()
    }

    fn target(&self) -> &Self::Node {
        (**self).target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_accessors() {
        let link = Link::new("A", "B");
        assert_eq!(link.source(), &"A");
        assert_eq!(link.target(), &"B");
        assert!(!link.is_self_loop());
        assert!(Link::new(1, 1).is_self_loop());
    }

    #[test]
    fn test_edge_impls_agree() {
        let link = Link::from(("A", "B"));
        let tuple = ("A", "B");

        assert_eq!(Edge::source(&link), Edge::source(&tuple));
        assert_eq!(Edge::target(&link), Edge::target(&tuple));
        assert_eq!(Edge::target(&&link), &"B");
    }

    #[test]
    fn test_link_deserializes_from_yaml() {
        let link: Link<String> = serde_yaml::from_str("source: A\ntarget: B\n").unwrap();
        assert_eq!(link, Link::new("A".to_string(), "B".to_string()));
    }
}
