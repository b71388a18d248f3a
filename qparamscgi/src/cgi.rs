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

use crate::pagegen::{MIME, gen_body};
use anyhow::{self as ah, format_err as err};
use qparams::Query;
use qparamscfg::Config;
use std::{
    env,
    ffi::OsString,
    io::{self, Stdout, Write as _},
};

const MAX_CGIENV_LEN: usize = 1024 * 16;

fn get_cgienv(name: &str) -> ah::Result<OsString> {
    let value = env::var_os(name).unwrap_or_default();
    if value.len() <= MAX_CGIENV_LEN {
        Ok(value)
    } else {
        Err(err!("Environment variable '{name}' is too long."))
    }
}

fn get_cgienv_str(name: &str) -> ah::Result<String> {
    if let Ok(s) = get_cgienv(name)?.into_string() {
        Ok(s)
    } else {
        Err(err!("Environment variable '{name}' is not valid UTF-8."))
    }
}

/// The query string is not capped here.
/// Its length limit is part of the configuration.
fn get_cgienv_query() -> String {
    query_from_os(env::var_os("QUERY_STRING").unwrap_or_default())
}

fn query_from_os(value: OsString) -> String {
    value.to_string_lossy().into_owned()
}

fn out(f: &mut Stdout, data: &[u8]) {
    let _ = f.write_all(data);
}

fn outstr(f: &mut Stdout, data: &str) {
    out(f, data.as_bytes());
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ok { body: Option<String> },
    BadRequest(String),
    InternalError(String),
}

impl Response {
    fn send(&self) {
        let mut f = io::stdout();
        match self {
            Self::Ok { body } => {
                outstr(&mut f, &format!("Content-type: {MIME}\n"));
                outstr(&mut f, "Status: 200 Ok\n");
                outstr(&mut f, "\n");
                if let Some(body) = body {
                    outstr(&mut f, body);
                }
            }
            Self::BadRequest(err) => {
                outstr(&mut f, "Content-type: text/plain\n");
                outstr(&mut f, "Status: 400 Bad Request\n");
                outstr(&mut f, "\n");
                outstr(&mut f, err);
            }
            Self::InternalError(err) => {
                outstr(&mut f, "Content-type: text/plain\n");
                outstr(&mut f, "Status: 500 Internal Server Error\n");
                outstr(&mut f, "\n");
                outstr(&mut f, err);
            }
        }
    }
}

pub struct Cgi {
    query: String,
    meth: String,
}

impl Cgi {
    pub fn new() -> ah::Result<Self> {
        let query = get_cgienv_query();
        let meth = get_cgienv_str("REQUEST_METHOD")?.trim().to_string();
        Ok(Self::with_request(query, meth))
    }

    pub fn with_request(query: String, meth: String) -> Self {
        Self { query, meth }
    }

    pub fn handle(&self, config: &Config) -> Response {
        let with_body = match &self.meth[..] {
            "GET" => true,
            "HEAD" => false,
            m => {
                log::info!("Rejected REQUEST_METHOD '{m}'");
                return Response::BadRequest(format!("Unsupported REQUEST_METHOD: '{m}'"));
            }
        };

        if self.query.len() > config.limits.max_query_len {
            log::info!("Rejected QUERY_STRING of {} bytes", self.query.len());
            return Response::BadRequest("QUERY_STRING is too long.".to_string());
        }

        let query = Query::parse(&self.query);
        let extracted = match config.extract(&query) {
            Ok(ex) => ex,
            Err(e) => {
                log::info!("Rejected query: {e}");
                return Response::BadRequest(e.to_string());
            }
        };

        if !with_body {
            return Response::Ok { body: None };
        }
        match gen_body(&extracted) {
            Ok(body) => Response::Ok { body: Some(body) },
            Err(e) => {
                log::error!("Generating response body failed: {e}");
                Response::InternalError("GET failed".to_string())
            }
        }
    }

    pub fn run(&self, config: &Config) {
        self.handle(config).send();
    }
}


// vim: ts=4 sw=4 expandtab
