//! Binds a `TodoController` to a `Transport`.
//!
//! # Design
//! Every `Effect` the controller hands out is spawned onto a `JoinSet`, and
//! its completion is fed back on the same task that owns the controller.
//! The controller is therefore only ever touched from one place.
//!
//! Each task is tracked by its tokio task id so a task that panics is still
//! reported to the controller as a failed request. Tasks whose request the
//! controller no longer wants (superseded fetches) are aborted, and dropping
//! or unmounting the session aborts everything still in flight.

use std::collections::HashMap;
use std::sync::Arc;

use todo_core::{
    render, Effect, HttpResponse, Notification, RequestId, Screen, SubmitError, TodoController,
    TransportError,
};
use tokio::task::{AbortHandle, Id, JoinSet};
use tracing::{debug, warn};

use crate::input::UserAction;
use crate::transport::Transport;

type Outcome = Result<HttpResponse, TransportError>;

pub struct Session<T: Transport> {
    controller: TodoController,
    transport: Arc<T>,
    inflight: JoinSet<Outcome>,
    tasks: HashMap<Id, (RequestId, AbortHandle)>,
}

impl<T: Transport> Session<T> {
    pub fn new(controller: TodoController, transport: T) -> Self {
        Self {
            controller,
            transport: Arc::new(transport),
            inflight: JoinSet::new(),
            tasks: HashMap::new(),
        }
    }

    pub fn controller(&self) -> &TodoController {
        &self.controller
    }

    pub fn screen(&self) -> Screen {
        render(self.controller.state(), self.controller.client().base_url())
    }

    pub fn has_inflight(&self) -> bool {
        !self.inflight.is_empty()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.controller.take_notifications()
    }

    pub fn mount(&mut self) {
        let effect = self.controller.mount();
        self.dispatch(effect);
    }

    /// Apply one user action. `Quit` unmounts.
    pub fn apply(&mut self, action: UserAction) -> Result<(), SubmitError> {
        match action {
            UserAction::SetTitle(title) => self.controller.set_title(title),
            UserAction::SetDescription(description) => self.controller.set_description(description),
            UserAction::Submit => {
                let effect = self.controller.submit()?;
                self.dispatch(effect);
            }
            UserAction::Refresh => {
                let effect = self.controller.refresh();
                self.dispatch(effect);
            }
            UserAction::Quit => self.unmount(),
        }
        Ok(())
    }

    /// Wait for the next request to finish and feed it to the controller.
    /// Returns `false` once nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        let (task, outcome) = match self.inflight.join_next_with_id().await {
            None => return false,
            Some(Ok((task, outcome))) => (task, outcome),
            Some(Err(err)) if err.is_cancelled() => {
                self.tasks.remove(&err.id());
                return true;
            }
            Some(Err(err)) => {
                warn!(error = %err, "request task failed");
                (err.id(), Err(TransportError::new(err.to_string())))
            }
        };
        let Some((id, _)) = self.tasks.remove(&task) else {
            return true;
        };
        if let Some(follow_up) = self.controller.complete(id, outcome) {
            self.dispatch(follow_up);
        }
        true
    }

    /// Drive every outstanding request, including follow-ups, to completion.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
        if !self.inflight.is_empty() {
            debug!(count = self.inflight.len(), "aborting in-flight requests");
        }
        self.inflight.abort_all();
        self.inflight.detach_all();
        self.tasks.clear();
    }

    fn dispatch(&mut self, effect: Effect) {
        let Effect { id, request, .. } = effect;
        let transport = Arc::clone(&self.transport);
        let handle = self
            .inflight
            .spawn(async move { transport.execute(request).await });
        self.tasks.insert(handle.id(), (id, handle));
        self.abort_abandoned();
    }

    /// Abort tasks whose request the controller has dropped.
    fn abort_abandoned(&mut self) {
        let controller = &self.controller;
        for (id, handle) in self.tasks.values() {
            if !controller.is_pending(*id) {
                debug!(%id, "aborting abandoned request");
                handle.abort();
            }
        }
    }
}
