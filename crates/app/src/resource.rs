use dioxus::prelude::*;
use shared_types::RequestError;
use std::future::Future;

/// Whether a request is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// Handle for one started request. Only the newest ticket may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Rendering view of a [`ResourceState`].
///
/// Result data is withheld while a request is in flight. A failure still
/// carries the last good snapshot so it can be shown under the error.
#[derive(Debug, PartialEq)]
pub enum ResourceStatus<'a, T> {
    Idle,
    Loading,
    Success(&'a T),
    Error {
        message: &'a str,
        stale: Option<&'a T>,
    },
}

/// Fetch state owned by a single view.
///
/// The last good snapshot survives failures so stale data stays visible
/// under the error banner. Responses carrying an outdated ticket are dropped,
/// so overlapping requests cannot overwrite newer state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    data: Option<T>,
    phase: Phase,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            phase: Phase::Idle,
            error: None,
            generation: 0,
        }
    }
}

impl<T> ResourceState<T> {
    /// Start a request. Supersedes any request still in flight.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.phase = Phase::Loading;
        Ticket(self.generation)
    }

    /// Apply a finished request. Returns `false` when the ticket is stale
    /// and the result was ignored.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, RequestError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.friendly_message().to_string());
            }
        }
        self.phase = Phase::Idle;
        true
    }

    /// Forget everything and orphan any in-flight request.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.data = None;
        self.error = None;
        self.phase = Phase::Idle;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn status(&self) -> ResourceStatus<'_, T> {
        if self.is_loading() {
            return ResourceStatus::Loading;
        }
        match (self.error.as_deref(), self.data.as_ref()) {
            (Some(message), stale) => ResourceStatus::Error { message, stale },
            (None, Some(data)) => ResourceStatus::Success(data),
            (None, None) => ResourceStatus::Idle,
        }
    }
}

/// Reactive wrapper around [`ResourceState`], created with [`use_async_resource`].
pub struct AsyncResource<T: 'static> {
    state: Signal<ResourceState<T>>,
}

impl<T: 'static> Clone for AsyncResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for AsyncResource<T> {}

impl<T: 'static> AsyncResource<T> {
    /// Run `fetch` and apply its result unless a newer request started meanwhile.
    ///
    /// Does not read the state signal, so it is safe to call from effects.
    pub fn run<F>(&self, fetch: F)
    where
        F: Future<Output = Result<T, RequestError>> + 'static,
    {
        let mut state = self.state;
        let ticket = state.write().begin();
        spawn(async move {
            let result = fetch.await;
            if !state.write().settle(ticket, result) {
                tracing::debug!(ticket = ticket.0, "Discarded stale response");
            }
        });
    }

    pub fn clear(&self) {
        let mut state = self.state;
        state.write().clear();
    }

    /// Clone of the current state. Subscribes the calling component.
    pub fn snapshot(&self) -> ResourceState<T>
    where
        T: Clone,
    {
        self.state.read().clone()
    }

    /// Inspect the state without subscribing (for event handlers).
    pub fn peek_with<R>(&self, f: impl FnOnce(&ResourceState<T>) -> R) -> R {
        f(&self.state.peek())
    }
}

/// Per-component async resource. Each call site owns an independent state.
pub fn use_async_resource<T: 'static>() -> AsyncResource<T> {
    let state = use_signal(ResourceState::<T>::default);
    AsyncResource { state }
}
