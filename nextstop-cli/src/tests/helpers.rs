//! Test helpers for writing request and catalog fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, failing the test on IO errors.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary directory with a UTF-8 root path.
pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A request body for a driver at (`latitude`, `longitude`) at `time`.
pub(super) fn request_body(latitude: f64, longitude: f64, time: &str) -> Value {
    json!({
        "currentLocation": { "latitude": latitude, "longitude": longitude },
        "currentTime": time,
    })
}

/// Serialise `value` into `path`.
pub(super) fn write_json(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_string_pretty(value).expect("serialise fixture");
    write_utf8(path, payload.as_bytes());
}
