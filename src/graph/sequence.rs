use crate::graph::route::Route;
use futures::stream::{self, Stream};
use std::ops::ControlFlow;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Receives the routes of a search one at a time, then a completion signal.
pub trait RouteObserver<T> {
    /// Called once per route. Returning `Break` unsubscribes: nothing else,
    /// completion included, is delivered afterwards.
    fn on_next(&mut self, route: Route<T>) -> ControlFlow<()>;

    /// Called once after the last route
    fn on_completed(&mut self) {}
}

/// Notification delivered through [`RouteSequence::publish`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEvent<T> {
    Route(Route<T>),
    Completed,
}

/// Outcome of one [`RouteSequence::subscribe`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    delivered: usize,
    completed: bool,
}

impl Subscription {
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// The result of one route search, delivered to consumers by push.
///
/// The search has already run to completion when a sequence exists, so
/// unsubscribing only stops delivery, never the search itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSequence<T> {
    routes: Vec<Route<T>>,
}

impl<T> RouteSequence<T> {
    pub fn new(routes: Vec<Route<T>>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route<T>> {
        self.routes.iter()
    }

    pub fn into_routes(self) -> Vec<Route<T>> {
        self.routes
    }

    /// Replay every route to `observer` in discovery order, then signal completion
    pub fn subscribe<O>(&self, observer: &mut O) -> Subscription
    where
        T: Clone,
        O: RouteObserver<T> + ?Sized,
    {
        let mut delivered = 0;
        for route in &self.routes {
            delivered += 1;
            if observer.on_next(route.clone()).is_break() {
                debug!("Observer unsubscribed after {} of {} routes", delivered, self.routes.len());
                return Subscription {
                    delivered,
                    completed: false,
                };
            }
        }

        observer.on_completed();
        Subscription {
            delivered,
            completed: true,
        }
    }

    /// Push the routes through a channel from a spawned task.
    ///
    /// Must be called from within a tokio runtime. Dropping the receiver
    /// unsubscribes; the task stops at its next send.
    pub fn publish(self, buffer: usize) -> mpsc::Receiver<RouteEvent<T>>
    where
        T: Send + 'static,
    {
        let (receiver, _task) = self.publish_with_handle(buffer);
        receiver
    }

    /// Like [`publish`](Self::publish), also returning the delivery task.
    /// The task resolves to `true` once `Completed` has been sent.
    pub(crate) fn publish_with_handle(
        self,
        buffer: usize,
    ) -> (mpsc::Receiver<RouteEvent<T>>, JoinHandle<bool>)
    where
        T: Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(buffer.max(1));
        let total = self.routes.len();

        let task = tokio::spawn(async move {
            for (sent, route) in self.routes.into_iter().enumerate() {
                if sender.send(RouteEvent::Route(route)).await.is_err() {
                    debug!("Route receiver dropped after {} of {} routes", sent, total);
                    return false;
                }
            }

            if sender.send(RouteEvent::Completed).await.is_err() {
                debug!("Route receiver dropped before completion");
                return false;
            }
            true
        });

        (receiver, task)
    }

    /// The same replay as a stream; the end of the stream is the completion signal
    pub fn into_stream(self) -> impl Stream<Item = Route<T>> {
        stream::iter(self.routes)
    }
}

impl<T> IntoIterator for RouteSequence<T> {
    type Item = Route<T>;
    type IntoIter = std::vec::IntoIter<Route<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

/// Observer that keeps every route it receives
#[derive(Debug, Clone)]
pub struct RouteCollector<T> {
    routes: Vec<Route<T>>,
    completed: bool,
}

impl<T> RouteCollector<T> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            completed: false,
        }
    }

    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn into_routes(self) -> Vec<Route<T>> {
        self.routes
    }
}

impl<T> Default for RouteCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteObserver<T> for RouteCollector<T> {
    fn on_next(&mut self, route: Route<T>) -> ControlFlow<()> {
        self.routes.push(route);
        ControlFlow::Continue(())
    }

    fn on_completed(&mut self) {
        self.completed = true;
    }
}
