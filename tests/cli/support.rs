use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for pagezettel, isolated from the user's global config
pub fn pagezettel(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pagezettel");
    cmd.env("PAGEZETTEL_CONFIG_DIR", config_dir)
        .env("LANG", "en_US.UTF-8")
        .env_remove("PAGEZETTEL_VAULT")
        .env_remove("PAGEZETTEL_LOG");
    cmd
}

/// A vault initialized with the default templates, plus a private
/// config directory
pub struct TestVault {
    pub dir: TempDir,
    pub config: TempDir,
}

impl TestVault {
    pub fn new() -> Self {
        let vault = Self::empty();
        vault.cmd().arg("init").assert().success();
        vault
    }

    /// A temporary directory that is not a vault yet
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            config: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A command run from inside the vault
    pub fn cmd(&self) -> Command {
        let mut cmd = pagezettel(self.config.path());
        cmd.current_dir(self.path());
        cmd
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).unwrap()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Every regular file under `folder`, as sorted file names
    pub fn files_in(&self, folder: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path().join(folder))
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// First line of stdout
pub fn first_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Parse stdout as JSON
pub fn json_stdout(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).unwrap()
}
