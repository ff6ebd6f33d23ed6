/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Diagnostic `Display` output for generated shapes.
//!
//! Shapes render as `{Name: value,Name: value}`. Only members that are set are written, in the
//! order they are declared. Values are written as-is: embedded `,`, `:` or braces are not escaped.
//!
//! ```rust
//! use smithy_types::display::display_struct;
//! use std::fmt;
//!
//! struct Topic {
//!     arn: Option<String>,
//!     owner: Option<String>,
//! }
//!
//! impl fmt::Display for Topic {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         display_struct(f)
//!             .field("Arn", self.arn.as_deref())
//!             .field("Owner", self.owner.as_deref())
//!             .finish()
//!     }
//! }
//!
//! let topic = Topic { arn: Some("arn:aws:sns:us-east-1:1234:topic".into()), owner: None };
//! assert_eq!(topic.to_string(), "{Arn: arn:aws:sns:us-east-1:1234:topic}");
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// Builder returned by [`display_struct`], modeled on [`std::fmt::DebugStruct`]
#[must_use = "must eventually call `finish()` on DisplayStruct"]
pub struct DisplayStruct<'a, 'b: 'a> {
    fmt: &'a mut Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

pub fn display_struct<'a, 'b>(fmt: &'a mut Formatter<'b>) -> DisplayStruct<'a, 'b> {
    let result = fmt.write_str("{");
    DisplayStruct {
        fmt,
        result,
        has_fields: false,
    }
}

impl<'a, 'b: 'a> DisplayStruct<'a, 'b> {
    /// Writes `name: value` when `value` is set. Unset members are skipped entirely.
    pub fn field<T>(&mut self, name: &str, value: Option<&T>) -> &mut Self
    where
        T: Display + ?Sized,
    {
        if let Some(value) = value {
            if self.result.is_ok() {
                self.result = self.write_field(name, value);
            }
            self.has_fields = true;
        }
        self
    }

    fn write_field<T>(&mut self, name: &str, value: &T) -> fmt::Result
    where
        T: Display + ?Sized,
    {
        if self.has_fields {
            self.fmt.write_str(",")?;
        }
        write!(self.fmt, "{}: {}", name, value)
    }

    pub fn finish(&mut self) -> fmt::Result {
        if self.result.is_ok() {
            self.result = self.fmt.write_str("}");
        }
        self.result
    }
}

/// Renders a list as `[a, b, c]`
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<'a, T: Display> Display for DisplayList<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

/// Renders a map as `{k=v, k2=v2}`
///
/// Entries are sorted by key so that output is stable regardless of hash order.
pub struct DisplayMap<'a, K, V>(pub &'a HashMap<K, V>);

impl<'a, K, V> Display for DisplayMap<'a, K, V>
where
    K: Display + Ord,
    V: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        f.write_str("{")?;
        for (idx, (k, v)) in entries.into_iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        f.write_str("}")
    }
}
