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

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required query parameter was not present.
    MissingParam(String),
}

impl Error {
    /// Name of the offending parameter.
    pub fn name(&self) -> &str {
        match self {
            Self::MissingParam(name) => name,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParam(name) => write!(f, "missing required query parameter '{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::MissingParam("id".to_string());
        assert_eq!(e.to_string(), "missing required query parameter 'id'");
        assert_eq!(e.name(), "id");
    }
}

// vim: ts=4 sw=4 expandtab
