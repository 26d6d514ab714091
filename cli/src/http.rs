//! Browser front end: a single-page terminal that posts each line to `/run`.


use anyhow::anyhow;
use nlsh_commands::CommandOutcome;
use nlsh_commands::Resolution;
use nlsh_commands::Shell;
use nlsh_commands::system;
use nlsh_interpreter::DirectoryProbe;
use serde::Deserialize;
use serde::Serialize;
use tiny_http::Header;
use tiny_http::ListenAddr;
use tiny_http::Method;
use tiny_http::Response;
use tiny_http::Server;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// Output value telling the page to wipe its scrollback.
pub const CLEAR_SENTINEL: &str = "__CLEAR__";

const INDEX_HTML: &str = include_str!("index.html");
const CHAIN_SEPARATOR: char = ';';

#[derive(Debug, Deserialize)]
struct RunRequest {
    #[serde(default)]
    command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResponse {
    pub output: String,
    pub prompt: String,
}

/// A response ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn json(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "application/json",
            body,
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({ "error": message }).to_string())
    }
}

pub fn bind(host: &str, port: u16) -> anyhow::Result<Server> {
    let addr = format!("{host}:{port}");
    Server::http(&addr).map_err(|err| anyhow!("failed to bind {addr}: {err}"))
}

/// `http://host:port/` for a bound server, when it listens on TCP.
pub fn local_url(server: &Server) -> Option<String> {
    match server.server_addr() {
        ListenAddr::IP(addr) => Some(format!("http://{addr}/")),
        #[cfg(unix)]
        _ => None,
    }
}

/// Serves requests one at a time until the listener shuts down.
pub fn serve<P: DirectoryProbe>(server: &Server, mut shell: Shell<P>) {
    if let Some(url) = local_url(server) {
        info!(%url, "serving nlsh");
    }
    while let Ok(mut request) = server.recv() {
        let method = request.method().clone();
        let url = request.url().to_string();
        let mut body = String::new();
        let reply = match request.as_reader().read_to_string(&mut body) {
            Ok(_) => route(&mut shell, &method, &url, &body),
            Err(err) => {
                warn!(error = %err, "failed to read request body");
                Reply::error(400, "request body must be UTF-8")
            }
        };
        debug!(%method, %url, status = reply.status, "handled request");

        let mut response = Response::from_string(reply.body).with_status_code(reply.status);
        if let Ok(header) = Header::from_bytes("Content-Type", reply.content_type) {
            response = response.with_header(header);
        }
        if let Err(err) = request.respond(response) {
            warn!(error = %err, "failed to send response");
        }
    }
}

/// Maps one request onto a reply; no I/O beyond running commands.
pub fn route<P: DirectoryProbe>(
    shell: &mut Shell<P>,
    method: &Method,
    url: &str,
    body: &str,
) -> Reply {
    let path = url.split_once('?').map_or(url, |(path, _)| path);
    match (method, path) {
        (Method::Get, "/") => Reply {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: INDEX_HTML.to_string(),
        },
        (Method::Post, "/run") => match serde_json::from_str::<RunRequest>(body) {
            Ok(request) => {
                let response = RunResponse {
                    output: run_command(shell, &request.command),
                    prompt: prompt(),
                };
                match serde_json::to_string(&response) {
                    Ok(json) => Reply::json(200, json),
                    Err(err) => Reply::error(500, &err.to_string()),
                }
            }
            Err(err) => {
                debug!(error = %err, "rejected /run body");
                Reply::error(400, "expected a JSON body like {\"command\": \"ls\"}")
            }
        },
        (_, "/" | "/run") => Reply::error(405, "method not allowed"),
        _ => Reply::error(404, "not found"),
    }
}

/// Runs a `;`-separated chain and joins what each step printed.
pub fn run_command<P: DirectoryProbe>(shell: &mut Shell<P>, command: &str) -> String {
    let command = command.trim();
    shell.record(command);

    let mut outputs = Vec::new();
    let mut cleared = false;
    for part in command
        .split(CHAIN_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
    {
        let invocations = match shell.resolve(part) {
            Some(Resolution::Literal(invocation)) => vec![invocation],
            Some(Resolution::Interpreted(invocations)) => invocations,
            Some(Resolution::Unresolved { suggestions }) => {
                outputs.push(format!("{part}: command not found"));
                if !suggestions.is_empty() {
                    let keywords: Vec<&str> =
                        suggestions.iter().map(|command| command.keyword()).collect();
                    outputs.push(format!("Try: {}", keywords.join(", ")));
                }
                continue;
            }
            None => continue,
        };

        for invocation in &invocations {
            match shell.execute(invocation) {
                CommandOutcome::Output(text) | CommandOutcome::Failure(text) => outputs.push(text),
                CommandOutcome::ClearScreen => cleared = true,
                CommandOutcome::Exit => outputs.push("Goodbye!".to_string()),
            }
        }
    }

    if cleared && outputs.is_empty() {
        return CLEAR_SENTINEL.to_string();
    }
    outputs.join("\n")
}

/// `user@host:cwd$`, with the host cut at its first dot.
pub fn prompt() -> String {
    let host = gethostname::gethostname().to_string_lossy().into_owned();
    let host = host.split('.').next().unwrap_or_default();
    let cwd = std::env::current_dir()
        .map(|cwd| cwd.display().to_string())
        .unwrap_or_default();
    format!("{}@{host}:{cwd}$", system::whoami())
}
