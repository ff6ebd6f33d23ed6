/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Receives a notification when a cached identity id is replaced by a new one.
///
/// Closures of the form `Fn(&str, &str)` implement this trait, so most callers never
/// need to implement it by hand:
/// ```rust
/// use aws_auth::IdentityTracker;
/// let tracker = IdentityTracker::with_identity_id("us-east-1:old");
/// tracker.register(|old: &str, new: &str| println!("{} -> {}", old, new));
/// tracker.update("us-east-1:new");
/// ```
pub trait IdentityChangedListener: Send + Sync {
    fn identity_changed(&self, old_identity_id: &str, new_identity_id: &str);
}

impl<F> IdentityChangedListener for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn identity_changed(&self, old_identity_id: &str, new_identity_id: &str) {
        self(old_identity_id, new_identity_id)
    }
}

/// A cloneable, type-erased [`IdentityChangedListener`]
#[derive(Clone)]
pub struct SharedIdentityChangedListener(Arc<dyn IdentityChangedListener>);

impl SharedIdentityChangedListener {
    pub fn new(listener: impl IdentityChangedListener + 'static) -> Self {
        SharedIdentityChangedListener(Arc::new(listener))
    }
}

impl IdentityChangedListener for SharedIdentityChangedListener {
    fn identity_changed(&self, old_identity_id: &str, new_identity_id: &str) {
        self.0.identity_changed(old_identity_id, new_identity_id)
    }
}

impl Debug for SharedIdentityChangedListener {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SharedIdentityChangedListener")
    }
}
