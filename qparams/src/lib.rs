// -*- coding: utf-8 -*-
//
// Copyright (C) 2026 Michael Büsch <m@bues.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Access to required and optional query-string parameters.
//!
//! ```
//! use qparams::Query;
//!
//! let query = Query::parse("id=7&tag=a&tag=b");
//! let required = query.require_first(["id"]).unwrap();
//! assert_eq!(required["id"], "7");
//! let tags = query.optional_all(["tag", "sort"]).unwrap();
//! assert_eq!(tags["tag"], ["a", "b"]);
//! assert!(query.require_all(["id", "page"]).is_err());
//! ```

#![forbid(unsafe_code)]

mod access;
mod error;
mod query;

pub use crate::{error::Error, query::Query};

// vim: ts=4 sw=4 expandtab
