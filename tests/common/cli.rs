//! Runs the compiled binary inside a scratch directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct TestCli {
    dir: TempDir,
}

impl TestCli {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Scratch directory the binary runs in.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Run with `args`, `CONFIG_FILE` cleared.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().unwrap()
    }

    /// Run with `args` and `CONFIG_FILE` set to `config`.
    pub fn run_with_config_env(&self, args: &[&str], config: &Path) -> Output {
        self.command(args)
            .env("CONFIG_FILE", config)
            .output()
            .unwrap()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_monodither"));
        cmd.args(args)
            .current_dir(self.dir.path())
            .env_remove("CONFIG_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
