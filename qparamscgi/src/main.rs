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

mod cgi;
mod pagegen;

use crate::cgi::Cgi;
use anyhow::{self as ah, Context as _};
use clap::Parser;
use qparamscfg::Config;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Path to the extraction plan configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ah::Result<()> {
    // Log to stderr, which ends up in the web server's error log.
    env_logger::init();

    let opts = Opts::parse();

    let config = match &opts.config {
        Some(path) => Config::parse_file(path),
        None => Config::parse_default_file(),
    }
    .context("Configuration")?;

    // Handle the CGI with the web server.
    let cgi = Cgi::new().context("Initialize CGI")?;
    cgi.run(&config);
    Ok(())
}

// vim: ts=4 sw=4 expandtab
