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

use itertools::Itertools as _;
use qparamscfg::Extracted;
use std::{fmt::Write as _, writeln as ln};

pub const MIME: &str = "text/plain";

/// Render the extracted parameters, one `key = values` line per key, sorted by key.
pub fn gen_body(ex: &Extracted) -> Result<String, std::fmt::Error> {
    let mut b = String::new();
    let lines = ex
        .all
        .iter()
        .map(|(k, v)| (k, v.iter().join(", ")))
        .chain(ex.first.iter().map(|(k, v)| (k, v.clone())))
        .sorted();
    for (key, values) in lines {
        ln!(b, "{key} = {values}")?;
    }
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qparams::Query;
    use qparamscfg::Config;

    #[test]
    fn test_gen_body() {
        let config = Config::parse_str(
            "[required]\nall = [ \"b\" ]\n[optional]\nfirst = [ \"a\", \"c\" ]\n",
        )
        .unwrap();
        let q = Query::parse("a=1&a=2&b=x&b=y");
        let ex = config.extract(&q).unwrap();
        assert_eq!(gen_body(&ex).unwrap(), "a = 1\nb = x, y\n");
    }

    #[test]
    fn test_gen_body_empty() {
        assert_eq!(gen_body(&Extracted::default()).unwrap(), "");
    }
}

// vim: ts=4 sw=4 expandtab
