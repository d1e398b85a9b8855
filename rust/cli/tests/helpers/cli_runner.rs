use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

const CONFIG_VARS: &[&str] = &[
    "HOLDEM_CONFIG",
    "HOLDEM_SEED",
    "HOLDEM_SMALL_BLIND",
    "HOLDEM_STARTING_CHIPS",
    "HOLDEM_BOTS",
    "HOLDEM_DIFFICULTY",
    "HOLDEM_BOT_TIMEOUT_MS",
];

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: TempDir,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_holdem")),
            temp_dir: TempDir::new().expect("temp dir"),
        }
    }

    /// Scratch directory the binary runs in.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> String {
        self.dir().join(name).to_string_lossy().into_owned()
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    #[allow(dead_code)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.dir())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for key in CONFIG_VARS {
            cmd.env_remove(key);
        }
        cmd.env_remove("RUST_LOG");
        for (key, value) in env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to spawn holdem binary");
        if let Some(payload) = input
            && let Some(mut stdin) = child.stdin.take()
        {
            // the game may quit before reading everything
            let _ = stdin.write_all(payload.as_bytes());
        }
        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
