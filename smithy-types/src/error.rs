/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised while populating generated shapes

use thiserror::Error;

/// A shape could not be populated as requested
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// An entry was added to a map-valued member that already contained the key.
    ///
    /// The existing entry is left untouched.
    #[error("duplicated keys ({key}) are provided")]
    DuplicateKey { key: String },
}

impl BuildError {
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        BuildError::DuplicateKey { key: key.into() }
    }
}
