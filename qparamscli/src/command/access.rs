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

use super::{format_all, format_first};
use anyhow::{self as ah, Context as _};
use qparams::Query;

pub fn command_require_all(query: &Query, keys: &[String]) -> ah::Result<()> {
    let params = query.require_all(keys).context("Require all values")?;
    print!("{}", format_all(&params));
    Ok(())
}

pub fn command_require_first(query: &Query, keys: &[String]) -> ah::Result<()> {
    let params = query.require_first(keys).context("Require first value")?;
    print!("{}", format_first(&params));
    Ok(())
}

pub fn command_optional_all(query: &Query, keys: &[String]) -> ah::Result<()> {
    match query.optional_all(keys) {
        Some(params) => print!("{}", format_all(&params)),
        None => log::info!("None of the parameters is present."),
    }
    Ok(())
}

pub fn command_optional_first(query: &Query, keys: &[String]) -> ah::Result<()> {
    match query.optional_first(keys) {
        Some(params) => print!("{}", format_first(&params)),
        None => log::info!("None of the parameters is present."),
    }
    Ok(())
}

pub fn command_params(query: &Query, key: &str) -> ah::Result<()> {
    match query.params(key) {
        Some(values) => {
            for value in values {
                println!("{value}");
            }
        }
        None => log::info!("Parameter '{key}' is not present."),
    }
    Ok(())
}

pub fn command_param(query: &Query, key: &str) -> ah::Result<()> {
    let (value, found) = query.param(key);
    println!("{value}");
    println!("found = {found}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_missing() {
        let q = Query::parse("a=1");
        let keys = ["a".to_string(), "b".to_string()];
        let e = command_require_all(&q, &keys).unwrap_err();
        let e = e.downcast_ref::<qparams::Error>().unwrap();
        assert_eq!(e.name(), "b");
        assert!(command_require_first(&q, &keys[..1]).is_ok());
    }

    #[test]
    fn test_optional_never_fails() {
        let q = Query::parse("");
        let keys = ["a".to_string()];
        assert!(command_optional_all(&q, &keys).is_ok());
        assert!(command_optional_first(&q, &keys).is_ok());
        assert!(command_params(&q, "a").is_ok());
        assert!(command_param(&q, "a").is_ok());
    }
}

// vim: ts=4 sw=4 expandtab
