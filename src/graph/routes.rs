use crate::graph::link::Edge;
use crate::graph::route::Route;
use crate::graph::sequence::RouteSequence;
use tracing::{debug, trace};

/// Enumerates routes between two nodes
pub trait RouteFinder {
    type Node;

    /// Every simple directed route from `source` to `target`, pushed to
    /// subscribers in discovery order
    fn routes_between(&self, source: Self::Node, target: Self::Node) -> RouteSequence<Self::Node>;
}

/// Directed graph over a borrowed collection of links.
///
/// The links are never copied or modified. Every search reads them again, so
/// the order of the collection decides the order routes are discovered in.
#[derive(Debug)]
pub struct Graph<'a, E> {
    links: &'a [E],
}

impl<'a, E> Clone for Graph<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for Graph<'a, E> {}

impl<'a, E: Edge> Graph<'a, E> {
    pub fn new(links: &'a [E]) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &'a [E] {
        self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Links leaving `node`, in collection order
    pub fn outgoing<'n>(&self, node: &'n E::Node) -> impl Iterator<Item = &'a E> + 'n
    where
        'a: 'n,
        E::Node: PartialEq,
    {
        self.links.iter().filter(move |link| link.source() == node)
    }
}

impl<'a, E> Graph<'a, E>
where
    E: Edge,
    E::Node: PartialEq + Clone,
{
    /// Run the search to completion and return the routes in discovery order
    pub fn collect_routes(&self, source: E::Node, target: E::Node) -> Vec<Route<E::Node>> {
        debug!("Searching routes across {} links", self.links.len());

        let mut search = RouteSearch {
            links: self.links,
            target: &target,
            path: Vec::new(),
            cursors: Vec::new(),
            routes: Vec::new(),
        };
        search.run(source);

        debug!("Route search finished with {} routes", search.routes.len());
        search.routes
    }
}

impl<'a, E> RouteFinder for Graph<'a, E>
where
    E: Edge,
    E::Node: PartialEq + Clone,
{
    type Node = E::Node;

    fn routes_between(&self, source: E::Node, target: E::Node) -> RouteSequence<E::Node> {
        RouteSequence::new(self.collect_routes(source, target))
    }
}

/// Per-call search state. `path` doubles as the visited set: a node is
/// visited exactly while it sits on the path under exploration.
///
/// The walk uses an explicit stack so route length is not bounded by the
/// thread's call stack. `cursors[i]` is the index of the next link to try
/// from `path[i]`; a node and its cursor are always pushed and popped together.
struct RouteSearch<'a, 't, E: Edge> {
    links: &'a [E],
    target: &'t E::Node,
    path: Vec<E::Node>,
    cursors: Vec<usize>,
    routes: Vec<Route<E::Node>>,
}

impl<'a, 't, E> RouteSearch<'a, 't, E>
where
    E: Edge,
    E::Node: PartialEq + Clone,
{
    fn run(&mut self, source: E::Node) {
        self.enter(source);

        while let Some(&cursor) = self.cursors.last() {
            match self.next_step(cursor) {
                Some(index) => {
                    if let Some(last) = self.cursors.last_mut() {
                        *last = index + 1;
                    }
                    let next = self.links[index].target().clone();
                    self.enter(next);
                }
                None => {
                    self.path.pop();
                    self.cursors.pop();
                }
            }
        }
    }

    /// Visit `node`. The target is terminal: routes never continue through it.
    fn enter(&mut self, node: E::Node) {
        self.path.push(node);

        if self.path.last() == Some(self.target) {
            trace!("Route found with {} nodes", self.path.len());
            self.routes.push(Route::new(self.path.clone()));
            self.path.pop();
        } else {
            self.cursors.push(0);
        }
    }

    /// Index of the next link leaving the current node towards an unvisited node
    fn next_step(&self, cursor: usize) -> Option<usize> {
        let current = self.path.last()?;
        self.links[cursor..]
            .iter()
            .position(|link| link.source() == current && !self.path.contains(link.target()))
            .map(|offset| cursor + offset)
    }
}
