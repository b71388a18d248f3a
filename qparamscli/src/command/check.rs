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
use qparamscfg::Config;

pub fn command_check(query: &Query, config: &Config) -> ah::Result<()> {
    let extracted = config.extract(query).context("Extract parameters")?;
    print!("{}", format_all(&extracted.all));
    print!("{}", format_first(&extracted.first));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::parse_str(
            r#"
[required]
all = [ "id" ]

[optional]
first = [ "sort" ]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_check() {
        let q = Query::parse("id=1&id=2&sort=asc");
        assert!(command_check(&q, &config()).is_ok());
        assert!(command_check(&Query::parse("id=1"), &config()).is_ok());
    }

    #[test]
    fn test_check_missing() {
        let q = Query::parse("sort=asc");
        let e = command_check(&q, &config()).unwrap_err();
        let e = e.downcast_ref::<qparams::Error>().unwrap();
        assert_eq!(e, &qparams::Error::MissingParam("id".to_string()));
    }
}

// vim: ts=4 sw=4 expandtab
