/// Tracing setup: file output while the TUI owns the terminal, stderr otherwise
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Open `path` for appending, creating it if needed. Earlier sessions are kept.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Writer for the interactive game. A log file that can't be opened only
/// disables logging; it never stops the game.
pub fn play_writer(path: &Path) -> BoxMakeWriter {
    match open_log_file(path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            eprintln!(
                "warning: cannot open log file {}: {}; logging disabled",
                path.display(),
                e
            );
            BoxMakeWriter::new(io::sink)
        }
    }
}

pub fn init_for_play(path: &Path) {
    tracing_subscriber::fmt()
        .with_env_filter(filter("guessterm=info"))
        .with_writer(play_writer(path))
        .with_ansi(false)
        .init();
}

/// Non-interactive commands print to stdout, so logs go to stderr.
pub fn init_for_console() {
    tracing_subscriber::fmt()
        .with_env_filter(filter("guessterm=warn"))
        .with_writer(io::stderr)
        .init();
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn appends_to_existing_log() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("g.log");
        fs::write(&path, "keep-me\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "next session").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "keep-me\nnext session\n");
    }

    #[test]
    fn creates_missing_log() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn directory_path_falls_back_to_sink() {
        let temp = TempDir::new().unwrap();
        assert!(open_log_file(temp.path()).is_err());

        // Still yields a usable writer.
        let writer = play_writer(temp.path());
        let mut sink = writer.make_writer();
        sink.write_all(b"dropped").unwrap();
    }

    #[test]
    fn missing_parent_falls_back_to_sink() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no").join("such").join("dir.log");
        assert!(open_log_file(&path).is_err());

        let writer = play_writer(&path);
        let mut sink = writer.make_writer();
        sink.write_all(b"dropped").unwrap();
        assert!(!path.exists());
    }
}
