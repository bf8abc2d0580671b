use super::{ConfigStore, StoreError, StoreResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Store that delegates to `wp config get` / `wp config set --raw`.
#[derive(Debug, Clone)]
pub struct WpCliStore {
    binary: String,
    wp_path: PathBuf,
}

impl WpCliStore {
    pub fn new(binary: &str, wp_path: &Path) -> Self {
        Self {
            binary: binary.to_string(),
            wp_path: wp_path.to_path_buf(),
        }
    }

    fn args(&self, args: &[&str]) -> Vec<String> {
        let mut all: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        all.push(format!("--path={}", self.wp_path.display()));
        all
    }

    fn run(&self, args: &[&str]) -> StoreResult<(String, Output)> {
        let args = self.args(args);
        let command = format!("{} {}", self.binary, args.join(" "));
        log::debug!("running {}", command);

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|source| StoreError::Spawn {
                command: command.clone(),
                source,
            })?;
        Ok((command, output))
    }
}

/// wp-cli reports a missing constant as an error; treat it as undefined.
fn is_undefined_error(stderr: &str) -> bool {
    stderr.contains("is not defined")
}

/// `wp config get` prints the value followed by a single newline.
fn strip_newline(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let text = text.strip_suffix('\n').unwrap_or(&text);
    text.strip_suffix('\r').unwrap_or(text).to_string()
}

impl ConfigStore for WpCliStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let (command, output) = self.run(&["config", "get", key])?;
        if output.status.success() {
            return Ok(Some(strip_newline(&output.stdout)));
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if is_undefined_error(&stderr) {
            return Ok(None);
        }
        Err(StoreError::Command { command, stderr })
    }

    fn set(&self, key: &str, raw_value: &str) -> StoreResult<()> {
        let (command, output) = self.run(&["config", "set", key, raw_value, "--raw"])?;
        if output.status.success() {
            return Ok(());
        }
        Err(StoreError::Command {
            command,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
