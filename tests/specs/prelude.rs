// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a canned HTTP coordinator and a fluent CLI runner.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};

use assert_cmd::Command;

pub use serde_json::json;

/// Minimal coordinator on a loopback port. GET paths answer with their
/// canned body (404 when unknown); every POST is acknowledged and recorded.
pub struct Coordinator {
    url: String,
    requests: Arc<Mutex<Vec<String>>>,
    state: tempfile::TempDir,
}

impl Coordinator {
    pub fn start(routes: &[(&str, serde_json::Value)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let routes: HashMap<String, String> =
            routes.iter().map(|(path, body)| (path.to_string(), body.to_string())).collect();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        std::thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                serve(stream, &routes, &recorded);
            }
        });
        Self { url, requests, state: tempfile::tempdir().unwrap() }
    }

    /// Requests seen so far, as "METHOD path body".
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<String> {
        self.requests().into_iter().filter(|r| r.starts_with("POST")).collect()
    }

    pub fn fv(&self) -> CliBuilder {
        cli().env("FV_URL", &self.url).env("FV_STATE_DIR", self.state.path().to_str().unwrap())
    }
}

fn serve(stream: TcpStream, routes: &HashMap<String, String>, recorded: &Mutex<Vec<String>>) {
    let mut reader = BufReader::new(&stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut length = 0;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).is_err() || header.trim().is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut body = vec![0; length];
    let _ = reader.read_exact(&mut body);
    let body = String::from_utf8_lossy(&body).to_string();
    recorded.lock().unwrap().push(format!("{method} {path} {body}").trim_end().to_string());

    let (status, reply) = match (method.as_str(), routes.get(&path)) {
        ("POST", _) => ("200 OK", String::new()),
        (_, Some(reply)) => ("200 OK", reply.clone()),
        _ => ("404 Not Found", String::new()),
    };
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
        reply.len()
    );
    let mut stream = &stream;
    let _ = stream.write_all(response.as_bytes());
}

/// `fv` with colour off and no user config.
pub fn cli() -> CliBuilder {
    let mut cmd = Command::cargo_bin("fv").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("FV_CONFIG", "/nonexistent/fv/config.toml")
        .env_remove("FV_URL")
        .env_remove("FV_LOG");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert_eq!(
            run.code, 0,
            "expected success\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert_eq!(
            run.code, code,
            "unexpected exit\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }
}

pub struct RunAssert {
    code: i32,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }
}

/// Jobs as the coordinator lists them.
pub fn farm_jobs() -> serde_json::Value {
    json!([
        { "id": "1", "name": "intro", "status": 2, "chunks": 1, "priority": 1, "length": 10, "done": 10 },
        { "id": "2", "name": "teaser", "status": 1, "chunks": 3, "priority": 2, "length": 10 },
    ])
}
