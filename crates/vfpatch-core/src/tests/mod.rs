//! Unit and behavioural tests for the patching primitives.


use camino::Utf8PathBuf;
use tempfile::TempDir;

use crate::Workspace;

/// Temporary directory opened as a workspace. The directory lives as long as
/// the returned guard.
pub(crate) struct TempWorkspace {
    pub(crate) dir: TempDir,
    pub(crate) workspace: Workspace,
}

impl TempWorkspace {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .expect("temp dir path should be UTF-8");
        let workspace = Workspace::open_ambient(&root).expect("open temp workspace");
        Self { dir, workspace }
    }

    pub(crate) fn write(&self, name: &str, content: impl AsRef<[u8]>) {
        std::fs::write(self.dir.path().join(name), content).expect("write fixture file");
    }

    pub(crate) fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("read fixture file")
    }
}

/// Builds `count` CRLF-terminated lines reading `line 1`, `line 2`, ...
pub(crate) fn numbered_lines(count: usize) -> String {
    (1..=count).map(|n| format!("line {n}\r\n")).collect()
}
