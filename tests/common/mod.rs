//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Start a mock backend that echoes each request back as JSON:
/// `{"method": .., "target": .., "headers": {..}, "body": ..}`.
///
/// Requests whose target starts with `/status/<code>` are answered with that code.
pub async fn start_echo_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(handle(socket));
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn handle(mut socket: TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split(' ');
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut headers = serde_json::Map::new();
    let mut content_length = 0usize;
    for line in lines.filter(|l| !l.is_empty()) {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim().to_string();
            if name == "content-length" {
                content_length = value.parse().unwrap_or(0);
            }
            headers.insert(name, serde_json::Value::String(value));
        }
    }

    while buf.len() < head_end + content_length {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let body_end = (head_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[head_end..body_end]).into_owned();

    let status = target
        .strip_prefix("/status/")
        .and_then(|rest| rest.split(['/', '?']).next())
        .and_then(|code| code.parse::<u16>().ok())
        .unwrap_or(200);

    let payload = serde_json::json!({
        "method": method,
        "target": target,
        "headers": headers,
        "body": body,
    })
    .to_string();

    let response = format!(
        "HTTP/1.1 {} Mock\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
