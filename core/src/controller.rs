//! View controller for the items screen.
//!
//! # Design
//! `TodoController` owns the `ViewState`, the form draft and the bookkeeping
//! for outstanding requests, but performs no I/O. Every operation that needs
//! the network returns an `Effect`; the host executes `effect.request` and
//! reports back through `complete` with the same `RequestId`.
//!
//! - `ViewState` is replaced as a whole on each transition, never patched.
//! - Only the most recently issued list request may replace the state. Older
//!   list responses are dropped, so a slow refresh cannot overwrite a newer
//!   one when submissions race.
//! - A successful create always triggers exactly one refresh; the new item
//!   is never appended locally.
//! - Create failures do not touch the state. They go to the notification
//!   queue and the draft is kept so the user can resubmit.
//! - `unmount` forgets every outstanding request; completions that arrive
//!   afterwards are ignored.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::client::ItemsClient;
use crate::error::{ApiError, SubmitError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Item, NewItemDraft};

/// Shown in place of the list when fetching fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data from API. Check server status or URL.";

/// Raised as an alert when creating an item fails.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to add item. Please try again.";

/// What the screen currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Not mounted yet, or unmounted before the last fetch answered.
    Idle,
    Loading,
    Ready(Vec<Item>),
    Error(String),
}

impl ViewState {
    /// Items in server order; empty unless `Ready`.
    pub fn items(&self) -> &[Item] {
        match self {
            ViewState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Alert-level messages that live outside the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    SubmitFailed(String),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::SubmitFailed(msg) => f.write_str(msg),
        }
    }
}

/// Identifies one outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    List,
    Create,
}

/// A request the host must execute and later report through
/// `TodoController::complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub id: RequestId,
    pub kind: RequestKind,
    pub request: HttpRequest,
}

#[derive(Debug)]
pub struct TodoController {
    client: ItemsClient,
    state: ViewState,
    draft: NewItemDraft,
    notifications: Vec<Notification>,
    pending: HashMap<RequestId, RequestKind>,
    latest_fetch: Option<RequestId>,
    next_id: u64,
    mounted: bool,
}

impl TodoController {
    pub fn new(client: ItemsClient) -> Self {
        Self {
            client,
            state: ViewState::Idle,
            draft: NewItemDraft::default(),
            notifications: Vec::new(),
            pending: HashMap::new(),
            latest_fetch: None,
            next_id: 0,
            mounted: false,
        }
    }

    pub fn client(&self) -> &ItemsClient {
        &self.client
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn draft(&self) -> &NewItemDraft {
        &self.draft
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of requests issued and not yet completed or cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// False once the request has completed, been superseded or been
    /// cancelled. Hosts abort the I/O behind ids that are no longer pending.
    pub fn is_pending(&self, id: RequestId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Start showing the screen: go to `Loading` and fetch the list.
    pub fn mount(&mut self) -> Effect {
        self.mounted = true;
        self.issue_fetch()
    }

    /// Re-fetch the whole list. Mounts the controller if needed.
    pub fn refresh(&mut self) -> Effect {
        self.mount()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Submit the draft. A blank title is rejected without issuing anything.
    pub fn submit(&mut self) -> Result<Effect, SubmitError> {
        if !self.mounted {
            return Err(SubmitError::NotMounted);
        }
        if self.draft.title_is_blank() {
            debug!("rejecting submission with blank title");
            return Err(SubmitError::EmptyTitle);
        }
        let request = self.client.build_create_item(&self.draft.to_payload());
        Ok(self.issue(RequestKind::Create, request))
    }

    /// Feed back the outcome of an `Effect`. May return a follow-up effect
    /// (the refresh after a successful create).
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<HttpResponse, TransportError>,
    ) -> Option<Effect> {
        let Some(kind) = self.pending.remove(&id) else {
            debug!(%id, "ignoring completion for unknown or cancelled request");
            return None;
        };
        let outcome = outcome.map_err(ApiError::from);
        match kind {
            RequestKind::List => {
                self.finish_fetch(id, outcome);
                None
            }
            RequestKind::Create => self.finish_create(outcome),
        }
    }

    /// Drain queued alerts.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Stop tracking everything in flight. Late completions become no-ops.
    pub fn unmount(&mut self) {
        if !self.pending.is_empty() {
            debug!(count = self.pending.len(), "cancelling outstanding requests");
        }
        self.pending.clear();
        if self.latest_fetch.take().is_some() {
            self.state = ViewState::Idle;
        }
        self.mounted = false;
    }

    fn issue(&mut self, kind: RequestKind, request: HttpRequest) -> Effect {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, kind);
        debug!(
            %id,
            ?kind,
            method = request.method.as_str(),
            url = %request.url,
            "issuing request"
        );
        Effect { id, kind, request }
    }

    fn issue_fetch(&mut self) -> Effect {
        let effect = self.issue(RequestKind::List, self.client.build_list_items());
        if let Some(superseded) = self.latest_fetch.replace(effect.id) {
            self.pending.remove(&superseded);
            debug!(%superseded, "superseded by a newer fetch");
        }
        self.state = ViewState::Loading;
        effect
    }

    fn finish_fetch(&mut self, id: RequestId, outcome: Result<HttpResponse, ApiError>) {
        if self.latest_fetch != Some(id) {
            debug!(%id, "dropping stale list response");
            return;
        }
        self.latest_fetch = None;
        self.state = match outcome.and_then(|response| self.client.parse_list_items(response)) {
            Ok(items) => {
                debug!(count = items.len(), "items loaded");
                ViewState::Ready(items)
            }
            Err(err) => {
                warn!(error = %err, "fetching items failed");
                ViewState::Error(FETCH_FAILED_MESSAGE.to_string())
            }
        };
    }

    fn finish_create(&mut self, outcome: Result<HttpResponse, ApiError>) -> Option<Effect> {
        match outcome.and_then(|response| self.client.parse_create_item(response)) {
            Ok(item) => {
                info!(id = ?item.id, title = %item.title, "item created");
                // The item exists on the server now. Clearing here, not after
                // the refresh, keeps a failed refresh from inviting a
                // duplicate resubmission.
                self.draft = NewItemDraft::default();
                Some(self.issue_fetch())
            }
            Err(err) => {
                warn!(error = %err, "creating item failed");
                self.notifications
                    .push(Notification::SubmitFailed(SUBMIT_FAILED_MESSAGE.to_string()));
                None
            }
        }
    }
}
