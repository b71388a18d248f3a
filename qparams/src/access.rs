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

use crate::{error::Error, query::Query};
use std::collections::HashMap;

impl Query {
    fn require<T>(
        &self,
        keys: impl IntoIterator<Item = impl AsRef<str>>,
        pick: impl Fn(&[String]) -> T,
    ) -> Result<HashMap<String, T>, Error> {
        let mut ret = HashMap::new();
        for key in keys {
            let key = key.as_ref();
            let Some(values) = self.get_all(key) else {
                return Err(Error::MissingParam(key.to_string()));
            };
            ret.insert(key.to_string(), pick(values));
        }
        Ok(ret)
    }

    fn optional<T>(
        &self,
        keys: impl IntoIterator<Item = impl AsRef<str>>,
        pick: impl Fn(&[String]) -> T,
    ) -> Option<HashMap<String, T>> {
        let ret: HashMap<_, _> = keys
            .into_iter()
            .filter_map(|key| {
                let key = key.as_ref();
                self.get_all(key).map(|values| (key.to_string(), pick(values)))
            })
            .collect();
        if ret.is_empty() { None } else { Some(ret) }
    }

    /// Get all values of each of the `keys`.
    ///
    /// Fails on the first key that is not in the query.
    /// No partial result is returned in that case.
    pub fn require_all(
        &self,
        keys: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<HashMap<String, Vec<String>>, Error> {
        self.require(keys, <[String]>::to_vec)
    }

    /// Get the first value of each of the `keys`.
    ///
    /// Later occurrences of a key are discarded.
    /// Fails on the first key that is not in the query.
    pub fn require_first(
        &self,
        keys: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<HashMap<String, String>, Error> {
        self.require(keys, first)
    }

    /// Get all values of each of the `keys` that are present.
    ///
    /// Returns `None`, if none of the `keys` is present.
    pub fn optional_all(
        &self,
        keys: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Option<HashMap<String, Vec<String>>> {
        self.optional(keys, <[String]>::to_vec)
    }

    /// Get the first value of each of the `keys` that are present.
    ///
    /// Returns `None`, if none of the `keys` is present.
    pub fn optional_first(
        &self,
        keys: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Option<HashMap<String, String>> {
        self.optional(keys, first)
    }

    /// All values of a single optional parameter.
    pub fn params(&self, key: &str) -> Option<Vec<String>> {
        self.get_all(key).map(<[String]>::to_vec)
    }

    /// First value of a single optional parameter and whether it was present.
    ///
    /// An absent parameter yields `("", false)`.
    pub fn param(&self, key: &str) -> (String, bool) {
        match self.get(key) {
            Some(v) => (v.to_string(), true),
            None => (String::new(), false),
        }
    }
}

fn first(values: &[String]) -> String {
    values.first().cloned().unwrap_or_default()
}


// vim: ts=4 sw=4 expandtab
