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

mod command;

use crate::command::{
    access::{
        command_optional_all, command_optional_first, command_param, command_params,
        command_require_all, command_require_first,
    },
    check::command_check,
};
use anyhow::{self as ah, Context as _};
use clap::{Parser, Subcommand};
use qparams::Query;
use qparamscfg::Config;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Interpret QUERY as a full request URI instead of a bare query string.
    #[arg(long, global = true)]
    uri: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print all values of the given keys. Fails if any key is missing.
    RequireAll {
        query: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print the first value of the given keys. Fails if any key is missing.
    RequireFirst {
        query: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print all values of those given keys that are present.
    OptionalAll {
        query: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print the first value of those given keys that are present.
    OptionalFirst {
        query: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print all values of a single key, one per line.
    Params { query: String, key: String },
    /// Print the first value of a single key and whether it was found.
    Param { query: String, key: String },
    /// Run the extraction plan from a configuration file.
    Check {
        query: String,
        /// Path to the configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Command {
    fn query(&self) -> &str {
        match self {
            Self::RequireAll { query, .. }
            | Self::RequireFirst { query, .. }
            | Self::OptionalAll { query, .. }
            | Self::OptionalFirst { query, .. }
            | Self::Params { query, .. }
            | Self::Param { query, .. }
            | Self::Check { query, .. } => query,
        }
    }
}

fn main() -> ah::Result<()> {
    env_logger::init();

    let opts = Opts::parse();

    let query = if opts.uri {
        Query::from_uri(opts.command.query())
    } else {
        Query::parse(opts.command.query())
    };
    log::debug!("Parsed {} query parameters", query.len());

    match &opts.command {
        Command::RequireAll { keys, .. } => command_require_all(&query, keys),
        Command::RequireFirst { keys, .. } => command_require_first(&query, keys),
        Command::OptionalAll { keys, .. } => command_optional_all(&query, keys),
        Command::OptionalFirst { keys, .. } => command_optional_first(&query, keys),
        Command::Params { key, .. } => command_params(&query, key),
        Command::Param { key, .. } => command_param(&query, key),
        Command::Check { config, .. } => {
            let config = match config {
                Some(path) => Config::parse_file(path),
                None => Config::parse_default_file(),
            }
            .context("Configuration")?;
            command_check(&query, &config)
        }
    }
}

// vim: ts=4 sw=4 expandtab
