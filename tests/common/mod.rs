#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the api-snap binary.
#[macro_export]
macro_rules! api_snap {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("api-snap"))
    };
}

/// Temporary working directory for a test run.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Storage directory passed via `--dir`.
    pub fn store_dir(&self) -> PathBuf {
        self.dir.path().join("snaps")
    }

    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Command running inside the fixture with config discovery disabled.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = api_snap!();
        cmd.current_dir(self.path())
            .env_remove("API_SNAP_LOG")
            .env("NO_COLOR", "1")
            .arg("--no-config")
            .arg("--dir")
            .arg(self.store_dir());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Response served by [`TestServer`].
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CannedResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }
}

/// Minimal HTTP/1.1 server on a loopback port, answering every request with
/// the current canned response.
pub struct TestServer {
    addr: String,
    response: Arc<Mutex<CannedResponse>>,
}

impl TestServer {
    pub fn start(response: CannedResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let addr = listener.local_addr().expect("local addr").to_string();
        let response = Arc::new(Mutex::new(response));
        let shared = Arc::clone(&response);

        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let canned = shared.lock().expect("response lock").clone();
                let _ = serve(stream, &canned);
            }
        });

        Self { addr, response }
    }

    /// Accepts connections and never answers.
    pub fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let addr = listener.local_addr().expect("local addr").to_string();

        thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
            }
        });

        Self {
            addr,
            response: Arc::new(Mutex::new(CannedResponse::json(200, "{}"))),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn respond_with(&self, response: CannedResponse) {
        *self.response.lock().expect("response lock") = response;
    }
}

fn serve(stream: TcpStream, canned: &CannedResponse) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body)?;

    let mut out = format!("HTTP/1.1 {} Canned\r\n", canned.status);
    for (name, value) in &canned.headers {
        out.push_str(&format!("{name}: {value}\r\n"));
    }
    out.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        canned.body.len(),
        canned.body
    ));

    let mut stream = stream;
    stream.write_all(out.as_bytes())?;
    stream.flush()
}

/// A URL on a port nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/down")
}
