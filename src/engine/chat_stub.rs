//! In-process HTTP stub for chat-client tests: one scripted response per
//! expected request, captured request bodies for assertions.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct StubResponse {
    status: &'static str,
    body: String,
    stall: Option<Duration>,
}

impl StubResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: "200 OK",
            body: body.into(),
            stall: None,
        }
    }

    pub fn error(status: &'static str) -> Self {
        Self {
            status,
            body: "{}".into(),
            stall: None,
        }
    }

    /// Hold the response past the client timeout.
    pub fn stalled(stall: Duration) -> Self {
        Self {
            status: "200 OK",
            body: "{}".into(),
            stall: Some(stall),
        }
    }
}

pub struct StubServer {
    pub base_url: String,
    bodies: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn spawn(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let base_url = format!("http://{}", listener.local_addr().expect("stub addr"));
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&bodies);

        thread::spawn(move || {
            for response in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let body = read_request_body(&mut stream);
                captured.lock().expect("stub lock").push(body);

                if let Some(stall) = response.stall {
                    thread::sleep(stall);
                }
                let reply = format!(
                    "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    response.status,
                    response.body.len(),
                    response.body
                );
                let _ = stream.write_all(reply.as_bytes());
            }
        });

        Self { base_url, bodies }
    }

    pub fn request_bodies(&self) -> Vec<String> {
        self.bodies.lock().expect("stub lock").clone()
    }
}

fn read_request_body(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line == "\r\n" => break,
            Ok(_) => {
                if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }
    }
    let mut body = vec![0u8; content_length];
    let _ = reader.read_exact(&mut body);
    String::from_utf8_lossy(&body).into_owned()
}
