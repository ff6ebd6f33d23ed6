/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod display;
pub mod error;
pub mod hash;

use std::fmt;

pub use crate::error::BuildError;

/// Binary data, rendered as base64 when displayed.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base64::encode(&self.inner))
    }
}

#[cfg(test)]
mod test {
    use crate::Blob;

    #[test]
    fn blob_displays_as_base64() {
        assert_eq!(Blob::new("abc").to_string(), "YWJj");
        assert_eq!(Blob::new("anything you wan").to_string(), "YW55dGhpbmcgeW91IHdhbg==");
        assert_eq!(Blob::new(Vec::new()).to_string(), "");
    }

    #[test]
    fn blob_into_inner() {
        let blob = Blob::new(vec![1, 2, 3]);
        assert_eq!(blob.as_ref(), &[1, 2, 3]);
        assert_eq!(blob.into_inner(), vec![1, 2, 3]);
    }
}
