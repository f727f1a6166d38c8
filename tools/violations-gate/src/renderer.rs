use std::path::{Path, PathBuf};

/// Turns a report path into the string shown next to a tool's summary.
pub trait ReportUrlRenderer {
    fn render(&self, report: &Path) -> String;
}

impl<F> ReportUrlRenderer for F
where
    F: Fn(&Path) -> String,
{
    fn render(&self, report: &Path) -> String {
        self(report)
    }
}

/// Renders a clickable `file://` URL for the absolute report path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileUrlRenderer;

impl ReportUrlRenderer for FileUrlRenderer {
    fn render(&self, report: &Path) -> String {
        let absolute = absolutize(report);
        let mut path = absolute.to_string_lossy().replace('\\', "/");
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        format!("file://{}", percent_encode(&path))
    }
}

/// Renders the path as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPathRenderer;

impl ReportUrlRenderer for PlainPathRenderer {
    fn render(&self, report: &Path) -> String {
        report.display().to_string()
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' | b':' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
