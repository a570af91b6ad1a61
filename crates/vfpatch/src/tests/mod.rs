//! Unit and behavioural tests for the driver and the crypto contract script.


use std::ffi::OsString;
use std::path::{Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use vfpatch_config::{Config, MatchPolicy};
use vfpatch_core::Workspace;

use crate::{AppError, ConfigLoader};

pub(crate) const HEADER: &str = "string.h";
pub(crate) const MANIFEST: &str = "crt.dll.vfmanifest";

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Reads a stock input fixture.
pub(crate) fn input_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).expect("read input fixture")
}

/// Reads the patched output expected for a fixture.
pub(crate) fn expected_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join("expected").join(name))
        .expect("read expected fixture")
}

/// Temporary stdlib directory holding copies of the stock fixtures.
pub(crate) struct Stdlib {
    pub(crate) dir: TempDir,
}

impl Stdlib {
    /// Creates an empty directory with neither file present.
    pub(crate) fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Creates a directory seeded with the stock header and manifest.
    pub(crate) fn stock() -> Self {
        let stdlib = Self::empty();
        stdlib.write(HEADER, &input_fixture(HEADER));
        stdlib.write(MANIFEST, &input_fixture(MANIFEST));
        stdlib
    }

    pub(crate) fn root(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().to_path_buf())
            .expect("temp dir path should be UTF-8")
    }

    pub(crate) fn workspace(&self) -> Workspace {
        Workspace::open_ambient(self.root()).expect("open temp workspace")
    }

    pub(crate) fn config(&self, policy: MatchPolicy) -> Config {
        Config {
            root: Some(self.root()),
            match_policy: Some(policy),
            ..Config::default()
        }
    }

    pub(crate) fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("write fixture file");
    }

    pub(crate) fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("read patched file")
    }

    pub(crate) fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}

/// Stock header whose contract blocks no longer match the replacement
/// targets.
pub(crate) fn drifted_header() -> String {
    input_fixture(HEADER).replace("//@ requires", "//@ requires_drifted")
}

/// Loader returning a fixed configuration regardless of arguments.
pub(crate) struct StaticLoader(pub(crate) Config);

impl ConfigLoader for StaticLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.0.clone())
    }
}

pub(crate) fn header_path() -> &'static Utf8Path {
    Utf8Path::new(HEADER)
}

pub(crate) fn manifest_path() -> &'static Utf8Path {
    Utf8Path::new(MANIFEST)
}
