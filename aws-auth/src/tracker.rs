/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::identity::{IdentityChangedListener, SharedIdentityChangedListener};
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use tracing::{debug, trace};

/// Identifies a listener registered with an [`IdentityTracker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

/// Holds the current identity id and notifies listeners when it is superseded.
///
/// The tracker is cheap to clone; clones share the same id and listeners.
///
/// Listeners observe changes in the order they were applied. Changes are queued under the
/// state lock and a single dispatching thread delivers them, with no internal lock held while
/// a listener runs. A listener may therefore call back into the tracker; an `update` issued from
/// inside a listener is delivered after the notification currently in progress.
#[derive(Clone, Default)]
pub struct IdentityTracker {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    state: Mutex<State>,
    listeners: Mutex<Vec<(ListenerHandle, SharedIdentityChangedListener)>>,
    next_handle: AtomicU64,
}

#[derive(Default)]
struct State {
    identity_id: Option<String>,
    pending: VecDeque<Change>,
    dispatching: bool,
}

struct Change {
    old_identity_id: String,
    new_identity_id: String,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("cannot be poisoned")
    }

    fn listeners(&self) -> Vec<SharedIdentityChangedListener> {
        self.listeners
            .lock()
            .expect("cannot be poisoned")
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect()
    }

    /// Drains queued changes in order. Returns once the queue is empty.
    fn dispatch(&self) {
        let _guard = DispatchGuard(self);
        loop {
            let change = {
                let mut state = self.state();
                match state.pending.pop_front() {
                    Some(change) => change,
                    None => {
                        state.dispatching = false;
                        return;
                    }
                }
            };
            let listeners = self.listeners();
            debug!(
                old = %change.old_identity_id,
                new = %change.new_identity_id,
                listeners = listeners.len(),
                "identity id changed"
            );
            for listener in &listeners {
                listener.identity_changed(&change.old_identity_id, &change.new_identity_id);
            }
        }
    }
}

/// Hands dispatch off if a listener panics so later changes are still delivered.
struct DispatchGuard<'a>(&'a Inner);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.state().dispatching = false;
        }
    }
}

impl IdentityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity_id(identity_id: impl Into<String>) -> Self {
        let tracker = Self::new();
        tracker.inner.state().identity_id = Some(identity_id.into());
        tracker
    }

    /// The cached identity id, if one has been set
    pub fn identity_id(&self) -> Option<String> {
        self.inner.state().identity_id.clone()
    }

    pub fn register(&self, listener: impl IdentityChangedListener + 'static) -> ListenerHandle {
        let handle = ListenerHandle(self.inner.next_handle.fetch_add(1, Ordering::Relaxed));
        let mut listeners = self.inner.listeners.lock().expect("cannot be poisoned");
        listeners.push((handle, SharedIdentityChangedListener::new(listener)));
        trace!(handle = handle.0, listeners = listeners.len(), "registered identity listener");
        handle
    }

    /// Removes a listener. Returns `false` if the handle was not registered.
    pub fn unregister(&self, handle: ListenerHandle) -> bool {
        let mut listeners = self.inner.listeners.lock().expect("cannot be poisoned");
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != handle);
        let removed = listeners.len() != before;
        trace!(handle = handle.0, removed, "unregistered identity listener");
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().expect("cannot be poisoned").len()
    }

    /// Stores `new_identity_id` and returns whether it differs from the cached id.
    ///
    /// When a previous id existed, every listener is told about the change in
    /// registration order. Setting the first id notifies nobody.
    ///
    /// If another thread is already delivering notifications, this change is queued behind
    /// them and delivered by that thread, so `update` may return before listeners have seen it.
    pub fn update(&self, new_identity_id: impl Into<String>) -> bool {
        let new_identity_id = new_identity_id.into();
        {
            let mut state = self.inner.state();
            if state.identity_id.as_deref() == Some(new_identity_id.as_str()) {
                return false;
            }
            let old_identity_id = match state.identity_id.replace(new_identity_id.clone()) {
                Some(old) => old,
                None => {
                    debug!(new = %new_identity_id, "identity id established");
                    return true;
                }
            };
            state.pending.push_back(Change {
                old_identity_id,
                new_identity_id,
            });
            if state.dispatching {
                trace!(queued = state.pending.len(), "identity change queued");
                return true;
            }
            state.dispatching = true;
        }
        self.inner.dispatch();
        true
    }

    /// Drops the cached identity id without notifying listeners
    pub fn clear(&self) -> Option<String> {
        let previous = self.inner.state().identity_id.take();
        if previous.is_some() {
            debug!("identity id cleared");
        }
        previous
    }
}

impl fmt::Debug for IdentityTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityTracker")
            .field("identity_id", &self.identity_id())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
