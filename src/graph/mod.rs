pub mod link;
pub mod route;
pub mod routes;
pub mod sequence;

pub use link::{Edge, Link};
pub use route::Route;
pub use routes::{Graph, RouteFinder};
pub use sequence::{RouteCollector, RouteEvent, RouteObserver, RouteSequence, Subscription};
