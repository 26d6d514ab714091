use std::io::Read;
use std::io::Write;
use std::net::TcpStream;
use std::thread;

use anyhow::Result;
use nlsh_cli::http;
use nlsh_cli::http::RunResponse;
use nlsh_commands::Shell;
use nlsh_commands::ShellSettings;
use pretty_assertions::assert_eq;

fn post(addr: &str, path: &str, body: &str) -> Result<String> {
    let mut stream = TcpStream::connect(addr)?;
    write!(
        stream,
        "POST {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )?;
    let mut response = String::new();
    stream.read_to_string(&mut response)?;
    Ok(response)
}

fn start_server() -> Result<String> {
    let server = http::bind("127.0.0.1", 0)?;
    let url = http::local_url(&server).expect("tcp listener");
    let addr = url
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string();
    thread::spawn(move || http::serve(&server, Shell::new(ShellSettings::default())));
    Ok(addr)
}

#[test]
fn run_endpoint_over_tcp() -> Result<()> {
    let addr = start_server()?;

    let response = post(&addr, "/run", r#"{"command": "echo hello; frobnicate"}"#)?;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    let (_, body) = response.split_once("\r\n\r\n").expect("http body");
    let parsed: RunResponse = serde_json::from_str(body)?;
    assert_eq!(parsed.output, "hello\nfrobnicate: command not found");

    let response = post(&addr, "/run", "not json")?;
    assert!(response.starts_with("HTTP/1.1 400"), "{response}");
    Ok(())
}
