#![forbid(unsafe_code)]

mod entry;
mod handlers;
mod render;
mod server;
mod support;
mod tools;

pub(crate) use support::*;

pub(crate) use tm_storage::{FsStore, TaskEngine};

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

// Protocol negotiation: some MCP clients are strict about the server echoing
// a compatible protocol version. Keep this at the widely deployed baseline.
const MCP_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "taskmind-mcp";
const SERVER_VERSION: &str = "0.1.0";

pub(crate) struct McpServer {
    initialized: bool,
    engine: TaskEngine<FsStore>,
}

fn usage() -> &'static str {
    "tm_mcp — Taskmind MCP server (Rust, deterministic, stdio-first)\n\n\
USAGE:\n\
  tm_mcp [--storage-dir DIR]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version/build and exit\n\
\n\
NOTES:\n\
  - Task records are one JSON file per task under the storage dir\n\
  - Storage dir default: ./.taskmind/tasks (env: TASKMIND_STORAGE_DIR)\n"
}

fn version_line() -> String {
    format!("tm_mcp {SERVER_VERSION} build={}", build_fingerprint())
}

fn parse_storage_dir() -> PathBuf {
    let args = std::env::args().collect::<Vec<_>>();
    if let Some(pos) = args.iter().position(|arg| arg == "--storage-dir")
        && let Some(dir) = args.get(pos + 1)
    {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("TASKMIND_STORAGE_DIR") {
        let dir = dir.trim();
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(".taskmind").join("tasks")
}

fn write_last_crash(storage_dir: &Path, kind: &str, detail: &str) {
    // Best-effort crash report for debugging MCP transport issues. Never
    // includes request bodies.
    let _ = std::fs::create_dir_all(storage_dir);
    let path = storage_dir.join("taskmind_mcp_last_crash.txt");

    let mut out = String::new();
    let ts_ms = crate::now_ms_i64();
    let _ = writeln!(out, "ts={}", crate::ts_ms_to_rfc3339(ts_ms));
    let _ = writeln!(out, "pid={}", std::process::id());
    let _ = writeln!(out, "kind={kind}");
    let _ = writeln!(out, "build={}", crate::build_fingerprint());
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let _ = writeln!(out, "cwd={}", cwd.to_string_lossy());
    let _ = writeln!(out, "args={:?}", std::env::args().collect::<Vec<_>>());
    let _ = writeln!(out, "detail={detail}");

    let _ = std::fs::write(path, out);
}

fn install_crash_reporter(storage_dir: PathBuf) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut detail = info.to_string();
        let backtrace = std::backtrace::Backtrace::force_capture();
        let _ = write!(&mut detail, "\nbacktrace:\n{backtrace}");
        write_last_crash(&storage_dir, "panic", &detail);
        default_hook(info);
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return Ok(());
    }

    let storage_dir = parse_storage_dir();
    install_crash_reporter(storage_dir.clone());
    // Bounded session record for debugging transport issues. Written to the
    // storage dir, never to stdout/stderr.
    let mut session_log = SessionLog::new(&storage_dir);
    let storage_dir_for_errors = storage_dir.clone();

    let store = FsStore::open(&storage_dir)?;
    let mut server = McpServer {
        initialized: false,
        engine: TaskEngine::new(store),
    };

    let result = entry::run_stdio(&mut server, &mut session_log);
    match &result {
        Ok(()) => session_log.note_exit("eof"),
        Err(err) => {
            session_log.note_error(&err.to_string());
            session_log.note_exit("error");
            write_last_crash(&storage_dir_for_errors, "error", &format!("{err:?}"));
        }
    }
    result
}
