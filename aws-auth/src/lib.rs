/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Identity change notification for credential providers.
//!
//! Providers that cache an identity id (for example, a Cognito identity) use an
//! [`IdentityTracker`] to hold the current id and to tell interested parties when
//! a refreshed id supersedes it.

pub mod identity;
pub mod tracker;

pub use identity::{IdentityChangedListener, SharedIdentityChangedListener};
pub use tracker::{IdentityTracker, ListenerHandle};
