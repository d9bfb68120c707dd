use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const SUITE_HEADER: &str = "TestId,TestCase,Run,Method,URL,Endpoint,Authorization,User,Password,Headers,Body,ExpectedStatusCode,ExpectedResponse\n";

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a small JSON API for tests.
///
/// `GET /health` answers `{"status":"ok"}`, `GET /whoami` echoes the
/// Authorization header, `POST /users` answers 201 with the request body,
/// and every other path answers 404.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_api_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(stream: TcpStream) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut reader = match stream.try_clone() {
        Ok(clone) => BufReader::new(clone),
        Err(_) => return,
    };

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut authorization = String::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("authorization") {
                value.trim().clone_into(&mut authorization);
            }
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut body = vec![0u8; content_length];
    if reader.read_exact(&mut body).is_err() {
        return;
    }

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or_default();
    let (status, payload) = match (method, path) {
        ("GET", "/health") => ("200 OK", r#"{"status":"ok"}"#.to_owned()),
        ("GET", "/whoami") => (
            "200 OK",
            format!(r#"{{"authorization":"{}"}}"#, authorization),
        ),
        ("POST", "/users") => ("201 Created", String::from_utf8_lossy(&body).into_owned()),
        _ => ("404 Not Found", r#"{"error":"not found"}"#.to_owned()),
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    let mut stream = stream;
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `apicase` binary inside `dir` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_apicase<I, S>(dir: &Path, args: I, envs: &[(&str, &str)]) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = apicase_bin()?;
    let mut command = Command::new(bin);
    command
        .args(args)
        .current_dir(dir)
        .env("APICASE_LOG", "error")
        .env("NO_PROXY", "127.0.0.1")
        .env_remove("TEST_CASES_FILE")
        .env_remove("RESULTS_FILE")
        .env_remove("REPORT_FILE")
        .env_remove("HISTORY_DB");
    for (key, value) in envs {
        command.env(key, value);
    }
    command
        .output()
        .map_err(|err| format!("run apicase failed: {}", err))
}

fn apicase_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_apicase").map_or_else(
        || Err("CARGO_BIN_EXE_apicase missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

pub fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
