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

#![forbid(unsafe_code)]

use anyhow::{self as ah, Context as _, format_err as err};
use qparams::{Error, Query};
use std::{collections::HashMap, path::Path};
use toml::{Table, Value};

fn parse_key(name: &str, value: &Value) -> ah::Result<String> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        Value::String(_) => Err(err!(
            "Configuration entry '{name}' contains an empty key."
        )),
        _ => Err(err!(
            "Configuration entry '{name}' array element is not a string."
        )),
    }
}

fn parse_key_array(name: &str, value: &Value) -> ah::Result<Vec<String>> {
    let mut ret = vec![];
    if let Value::Array(array) = value {
        for value in array {
            ret.push(parse_key(name, value)?);
        }
    } else {
        return Err(err!("Configuration entry '{name}' is not an array."));
    }
    Ok(ret)
}

fn parse_usize(name: &str, value: &Value) -> ah::Result<usize> {
    match value {
        Value::Integer(val) => usize::try_from(*val)
            .map_err(|_| err!("Configuration entry '{name}' invalid integer.")),
        _ => Err(err!("Configuration entry '{name}' invalid integer.")),
    }
}

/// Parameter keys of one class (required or optional).
#[derive(Debug, Clone, Default)]
pub struct ConfigKeys {
    /// Keys for which all values are extracted.
    pub all: Vec<String>,
    /// Keys for which only the first value is extracted.
    pub first: Vec<String>,
}

impl ConfigKeys {
    fn parse_table(&mut self, t: &Table) -> ah::Result<()> {
        for (name, value) in t {
            if name == "all" {
                self.all = parse_key_array(name, value)?;
                continue;
            }
            if name == "first" {
                self.first = parse_key_array(name, value)?;
                continue;
            }
            log::warn!("Ignoring configuration entry: {name} = {value:?}");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLimits {
    pub max_query_len: usize,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_query_len: 1024 * 4,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub required: ConfigKeys,
    pub optional: ConfigKeys,
    pub limits: ConfigLimits,
}

/// Result of running the extraction plan of a [Config] on a [Query].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub all: HashMap<String, Vec<String>>,
    pub first: HashMap<String, String>,
}

impl Config {
    fn new() -> Self {
        Default::default()
    }

    pub fn parse_default_file() -> ah::Result<Self> {
        Self::parse_file(Path::new("/opt/qparams/etc/qparams/qparams.conf"))
    }

    pub fn parse_file(path: &Path) -> ah::Result<Self> {
        let s = if path.exists() {
            std::fs::read_to_string(path).context("Read configuration file")?
        } else {
            "".to_string()
        };
        Self::parse_str(&s)
    }

    pub fn parse_str(s: &str) -> ah::Result<Self> {
        let table: Table = toml::from_str(s).context("Parse configuration file")?;
        let mut config = Config::new();

        for (name, value) in &table {
            if name == "required"
                && let Value::Table(t) = value
            {
                config.required.parse_table(t)?;
                continue;
            }

            if name == "optional"
                && let Value::Table(t) = value
            {
                config.optional.parse_table(t)?;
                continue;
            }

            if name == "limits"
                && let Value::Table(t) = value
            {
                for (name, value) in t {
                    if name == "max-query-len" {
                        config.limits.max_query_len = parse_usize(name, value)?;
                        continue;
                    }
                    log::warn!("Ignoring configuration entry: {name} = {value:?}");
                }
                continue;
            }

            log::warn!("Ignoring configuration entry: {name} = {value:?}");
        }
        config.check_overlap()?;
        Ok(config)
    }

    /// A key is extracted either with all values or with the first value, not both.
    fn check_overlap(&self) -> ah::Result<()> {
        let all = self.required.all.iter().chain(&self.optional.all);
        for key in all {
            if self.required.first.contains(key) || self.optional.first.contains(key) {
                return Err(err!(
                    "Configuration key '{key}' is in both an 'all' and a 'first' list."
                ));
            }
        }
        Ok(())
    }

    /// Extract the configured parameters from `query`.
    ///
    /// Required keys are checked first, in the order
    /// `required.all`, `required.first`.
    /// Optional keys that are absent are left out of the result.
    pub fn extract(&self, query: &Query) -> Result<Extracted, Error> {
        let mut all = query.require_all(&self.required.all)?;
        let mut first = query.require_first(&self.required.first)?;
        if let Some(opt) = query.optional_all(&self.optional.all) {
            all.extend(opt);
        }
        if let Some(opt) = query.optional_first(&self.optional.first) {
            first.extend(opt);
        }
        Ok(Extracted { all, first })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONF: &str = r#"
[required]
all = [ "id" ]
first = [ "page" ]

[optional]
all = [ "tag" ]
first = [ "sort" ]

[limits]
max-query-len = 100
"#;

    #[test]
    fn test_parse_empty() {
        let config = Config::parse_str("").unwrap();
        assert!(config.required.all.is_empty());
        assert!(config.optional.first.is_empty());
        assert_eq!(config.limits.max_query_len, 4096);
    }

    #[test]
    fn test_parse() {
        let config = Config::parse_str(CONF).unwrap();
        assert_eq!(config.required.all, ["id"]);
        assert_eq!(config.required.first, ["page"]);
        assert_eq!(config.optional.all, ["tag"]);
        assert_eq!(config.optional.first, ["sort"]);
        assert_eq!(config.limits.max_query_len, 100);
    }

    #[test]
    fn test_parse_unknown_ignored() {
        let config = Config::parse_str("foo = 1\n[required]\nbar = 2\n").unwrap();
        assert!(config.required.all.is_empty());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse_str("[required]\nall = \"id\"\n").is_err());
        assert!(Config::parse_str("[required]\nall = [ 1 ]\n").is_err());
        assert!(Config::parse_str("[optional]\nfirst = [ \"\" ]\n").is_err());
        assert!(Config::parse_str("[limits]\nmax-query-len = -1\n").is_err());
        assert!(Config::parse_str("[limits\n").is_err());
    }

    #[test]
    fn test_parse_overlap() {
        assert!(Config::parse_str("[required]\nall = [ \"a\" ]\nfirst = [ \"a\" ]\n").is_err());
        assert!(
            Config::parse_str("[required]\nall = [ \"a\" ]\n[optional]\nfirst = [ \"a\" ]\n")
                .is_err()
        );
        assert!(
            Config::parse_str("[optional]\nall = [ \"a\" ]\n[required]\nfirst = [ \"a\" ]\n")
                .is_err()
        );
        let config =
            Config::parse_str("[required]\nall = [ \"a\" ]\n[optional]\nall = [ \"a\" ]\n")
                .unwrap();
        let ex = config.extract(&Query::parse("a=1&a=2")).unwrap();
        assert_eq!(ex.all["a"], ["1", "2"]);
        assert!(ex.first.is_empty());
    }

    #[test]
    fn test_parse_large_limit() {
        let config = Config::parse_str("[limits]\nmax-query-len = 1048576\n").unwrap();
        assert_eq!(config.limits.max_query_len, 1024 * 1024);
    }

    #[test]
    fn test_parse_missing_file() {
        let config = Config::parse_file(Path::new("/nonexistent/qparams.conf")).unwrap();
        assert!(config.required.first.is_empty());
    }

    #[test]
    fn test_extract() {
        let config = Config::parse_str(CONF).unwrap();

        let q = Query::parse("id=1&id=2&page=3&page=4&tag=x");
        let ex = config.extract(&q).unwrap();
        assert_eq!(ex.all.len(), 2);
        assert_eq!(ex.all["id"], ["1", "2"]);
        assert_eq!(ex.all["tag"], ["x"]);
        assert_eq!(ex.first.len(), 1);
        assert_eq!(ex.first["page"], "3");

        let q = Query::parse("id=1&sort=asc");
        let e = config.extract(&q).unwrap_err();
        assert_eq!(e, Error::MissingParam("page".to_string()));
    }
}

// vim: ts=4 sw=4 expandtab
