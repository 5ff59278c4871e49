#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub const SUGGEST_PATH: &str = "/api/v2/position/suggest/en/";

/// Answers exactly one HTTP request with a canned response, then exits.
pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl MockServer {
    pub fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut line = String::new();
                let read = reader.read_line(&mut line).unwrap();
                if read == 0 || line == "\r\n" {
                    break;
                }
            }

            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line.trim_end().to_string()
        });

        Self {
            base_url: format!("http://{}{}", addr, SUGGEST_PATH),
            handle,
        }
    }

    pub fn json(body: &Value) -> Self {
        Self::start("200 OK", &body.to_string())
    }

    /// Block until the request was served and return its request line.
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}

/// Base URL of a port nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, SUGGEST_PATH)
}

/// Base URL of a server that accepts connections but never answers.
pub fn silent_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://{}{}", addr, SUGGEST_PATH)
}

pub fn placemark(id: i64, name: &str, full_name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "fullName": full_name,
        "type": "location",
        "country": "Germany",
        "geo_position": {"latitude": 52.52, "longitude": 13.405},
        "inEurope": true,
        "countryCode": "DE",
        "coreCountry": true
    })
}

pub fn berlin_body() -> &'static str {
    r#"[{"_id":1,"name":"Berlin","fullName":"Berlin, Germany","type":"city","country":"Germany","geo_position":{"latitude":52.52,"longitude":13.405},"inEurope":true,"countryCode":"DE","coreCountry":true}]"#
}
