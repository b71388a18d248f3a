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

use std::collections::{HashMap, hash_map::Keys};

/// Decoded query string.
///
/// Every key maps to the non-empty list of its values,
/// in the order they occurred in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    items: HashMap<String, Vec<String>>,
}

impl Query {
    pub fn new() -> Self {
        Default::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored.
    /// A key without `=` gets the empty string as value.
    /// Keys are taken literally. `a[b]=1` is the key `a[b]`.
    pub fn parse(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        form_urlencoded::parse(qs.as_bytes())
            .into_owned()
            .collect()
    }

    /// Parse the query part of a request URI.
    pub fn from_uri(uri: &str) -> Self {
        let uri = uri.split_once('#').map_or(uri, |(u, _)| u);
        match uri.split_once('?') {
            Some((_, qs)) => Self::parse(qs),
            None => Self::new(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.entry(key.into()).or_default().push(value.into());
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key)
            .and_then(|v| v.first())
            .map(|v| v.as_str())
    }

    /// All values of `key`, in occurrence order.
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.items.get(key).map(|v| &**v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn keys(&self) -> Keys<'_, String, Vec<String>> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.push(key, value);
        }
        query
    }
}

impl From<HashMap<String, Vec<String>>> for Query {
    fn from(mut items: HashMap<String, Vec<String>>) -> Self {
        items.retain(|_, v| !v.is_empty());
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(Query::parse("").is_empty());
        assert!(Query::parse("?").is_empty());
    }

    #[test]
    fn test_parse_repeated() {
        let q = Query::parse("k=first&x=1&k=second&k=third&x=2");
        assert_eq!(q.len(), 2);
        assert_eq!(q.get_all("k").unwrap(), ["first", "second", "third"]);
        assert_eq!(q.get_all("x").unwrap(), ["1", "2"]);
        assert_eq!(q.get("k"), Some("first"));
    }

    #[test]
    fn test_parse_decoding() {
        let q = Query::parse("?name=a+b%21&k%2By=v%2Bw");
        assert_eq!(q.get("name"), Some("a b!"));
        assert_eq!(q.get("k+y"), Some("v+w"));
    }

    #[test]
    fn test_parse_bare_and_empty() {
        let q = Query::parse("flag&a=&&b=2");
        assert_eq!(q.get("flag"), Some(""));
        assert_eq!(q.get("a"), Some(""));
        assert_eq!(q.get("b"), Some("2"));
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_parse_no_nesting() {
        let q = Query::parse("a[b]=1&a[]=2");
        assert_eq!(q.get("a[b]"), Some("1"));
        assert_eq!(q.get("a[]"), Some("2"));
        assert!(!q.contains("a"));
    }

    #[test]
    fn test_from_uri() {
        let q = Query::from_uri("http://example.com/?required=1&required=2#frag");
        assert_eq!(q.get_all("required").unwrap(), ["1", "2"]);

        assert!(Query::from_uri("http://example.com/").is_empty());
        assert!(Query::from_uri("/path#x?y=1").is_empty());
    }

    #[test]
    fn test_inspect() {
        let q: Query = [("b", "1"), ("a", "2"), ("b", "3")].into_iter().collect();
        let mut keys: Vec<_> = q.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["a", "b"]);
        assert!(q.contains("a"));
        assert_eq!(q.get_all("b").unwrap(), ["1", "3"]);
        assert_eq!(q.get("c"), None);
    }

    #[test]
    fn test_from_map() {
        let mut m = HashMap::new();
        m.insert("a".to_string(), vec!["1".to_string()]);
        m.insert("b".to_string(), vec![]);
        let q = Query::from(m);
        assert!(q.contains("a"));
        assert!(!q.contains("b"));
        assert_eq!(q.len(), 1);
    }
}

// vim: ts=4 sw=4 expandtab
