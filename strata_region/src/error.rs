// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use strata_shape::InvalidShape;

use crate::RegionId;

/// Error returned by fallible region tree operations.
///
/// Failed operations never leave a partial mutation behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionError {
    /// The supplied shape failed validation.
    InvalidShape(InvalidShape),
    /// The referenced region is not in the tree, or is not a child of the
    /// region the operation was applied to.
    UnknownRegion(RegionId),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape(err) => fmt::Display::fmt(err, f),
            Self::UnknownRegion(id) => write!(f, "unknown region with id {id}"),
        }
    }
}

impl core::error::Error for RegionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidShape(err) => Some(err),
            Self::UnknownRegion(_) => None,
        }
    }
}

impl From<InvalidShape> for RegionError {
    fn from(err: InvalidShape) -> Self {
        Self::InvalidShape(err)
    }
}
