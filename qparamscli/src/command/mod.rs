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

pub mod access;
pub mod check;

use itertools::Itertools as _;
use std::collections::HashMap;

pub fn format_all(params: &HashMap<String, Vec<String>>) -> String {
    params
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(k, v)| format!("{k} = {}\n", v.iter().join(", ")))
        .collect()
}

pub fn format_first(params: &HashMap<String, String>) -> String {
    params
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(k, v)| format!("{k} = {v}\n"))
        .collect()
}


// vim: ts=4 sw=4 expandtab
