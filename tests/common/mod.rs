// tests/common/mod.rs
//
// Shared fakes: a canned SearchApi and a one-shot HTTP responder on localhost.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use page_search::search::{SearchApi, SearchError, SearchRequest, SearchResponse, SearchResult};

/// Always answers the same thing; remembers nothing.
pub struct Canned(pub Result<SearchResponse, SearchError>);

impl Canned {
    pub fn ok(results: Vec<SearchResult>) -> Self {
        Canned(Ok(SearchResponse { results }))
    }
    pub fn err(e: SearchError) -> Self {
        Canned(Err(e))
    }
}

impl SearchApi for Canned {
    fn search(&self, _req: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.0.clone()
    }
}

pub fn hello_result() -> SearchResult {
    SearchResult::new("<p>hello world foo bar</p>", Some(87.0))
}

/// Bind, answer exactly one request, hand back the raw request text.
pub fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("addr"));

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).expect("write");
        stream.flush().expect("flush");
        request
    });
    (base, handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        let n = stream.read(&mut chunk).expect("read");
        if n == 0 {
            return String::from_utf8_lossy(&buf).into_owned();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(i) = find(&buf, b"\r\n\r\n") {
            break i + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
    let len = head
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < head_end + len {
        let n = stream.read(&mut chunk).expect("read body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}

/// A localhost port with nothing listening on it.
pub fn dead_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}
