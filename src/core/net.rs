// src/core/net.rs
// Plain HTTP/1.0 GET over TCP (std-only, no TLS).
// HTTP/1.0 makes the server close the connection at the end, so there is
// no chunked transfer to undo.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Host, port and path of an `http://` URL.
#[derive(Debug, PartialEq, Eq)]
pub struct HttpTarget {
    pub host: String,
    pub port: u16,
    pub path: String,
}

/// Split `http://host[:port][/path]`. Anything else is a retrieval error.
pub fn parse_http_url(url: &str) -> Result<HttpTarget> {
    if url.starts_with("https://") {
        return Err(ScrapeError::retrieval(url, "https is not supported; save the page and pass file:<path>"));
    }
    let rest = url
        .strip_prefix("http://")
        .ok_or_else(|| ScrapeError::retrieval(url, "not an http:// URL"))?;

    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    let (host, port) = match authority.rsplit_once(':') {
        Some((h, p)) => {
            let port: u16 = p
                .parse()
                .map_err(|_| ScrapeError::retrieval(url, format!("bad port {:?}", p)))?;
            (h, port)
        }
        None => (authority, 80),
    };
    if host.is_empty() {
        return Err(ScrapeError::retrieval(url, "missing host"));
    }
    Ok(HttpTarget { host: s!(host), port, path: s!(path) })
}

/// Fetch the body of `url` as raw bytes. One attempt, 200 only.
pub fn http_get(url: &str) -> Result<Vec<u8>> {
    let target = parse_http_url(url)?;
    let fail = |e: std::io::Error| ScrapeError::retrieval(url, e);

    let mut s = TcpStream::connect((target.host.as_str(), target.port)).map_err(fail)?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS))).map_err(fail)?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS))).map_err(fail)?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        target.path, target.host, USER_AGENT
    );
    s.write_all(req.as_bytes()).map_err(fail)?;
    s.flush().map_err(fail)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(fail)?;
    logd!(bytes = buf.len(), "HTTP response read from {}", url);

    split_response(url, buf)
}

/// Check the status line and return everything after the header block.
fn split_response(url: &str, buf: Vec<u8>) -> Result<Vec<u8>> {
    let header_end = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or_else(|| ScrapeError::retrieval(url, "malformed HTTP response"))?;

    let head = String::from_utf8_lossy(&buf[..header_end]);
    let status = head.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(ScrapeError::retrieval(url, format!("HTTP error: {}", status)));
    }
    Ok(buf[header_end + 4..].to_vec())
}
