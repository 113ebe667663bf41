//! Line-delimited JSON acknowledgment stub
//!
//! Reads one request object per line and answers every well-formed one
//! with `{"id": .., "result": {"ok": true}, "error": null}`. The method is
//! not dispatched on. Lines that do not parse are skipped.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Incoming request
#[derive(Clone, Debug, Deserialize)]
pub struct Request {
    /// Caller-chosen identifier, echoed back unchanged
    pub id: Value,
    /// Requested method (ignored)
    pub method: String,
    /// Method parameters (ignored)
    #[serde(default)]
    pub params: Option<Value>,
}

/// Acknowledgment payload
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    /// Always true
    pub ok: bool,
}

/// Outgoing response
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Response {
    /// Identifier copied from the request
    pub id: Value,
    /// Acknowledgment
    pub result: Ack,
    /// Always null
    pub error: Option<Value>,
}

impl Response {
    /// Acknowledge a request
    pub fn ack(request: Request) -> Self {
        Response {
            id: request.id,
            result: Ack { ok: true },
            error: None,
        }
    }
}

/// Counters for one run of the line loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectorStats {
    /// Lines answered
    pub answered: usize,
    /// Non-empty lines that failed to parse
    pub skipped: usize,
}

/// Parse one line and build its response, if any
pub fn respond(line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!(id = %request.id, method = %request.method, "acknowledging request");
            Some(Response::ack(request))
        }
        Err(e) => {
            warn!("Skipping malformed request line: {}", e);
            None
        }
    }
}

/// Answer every request line from `input` on `output`
///
/// Lines that are not valid UTF-8 are skipped like any other malformed line.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<ConnectorStats> {
    let mut stats = ConnectorStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipping request line that is not UTF-8: {}", e);
                stats.skipped += 1;
                continue;
            }
        };

        match respond(line) {
            Some(response) => {
                serde_json::to_writer(&mut output, &response)?;
                output.write_all(b"\n")?;
                stats.answered += 1;
            }
            None if !line.trim().is_empty() => stats.skipped += 1,
            None => {}
        }
    }

    output.flush()?;
    Ok(stats)
}
