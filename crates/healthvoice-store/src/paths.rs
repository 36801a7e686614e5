//! Path resolution for the data directory

use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "HEALTHVOICE_HOME";

/// Resolves standard paths for the database, config and reports
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// `$HEALTHVOICE_HOME` when set, else `~/.healthvoice`
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::at(PathBuf::from(dir)));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self::at(home.join(".healthvoice")))
    }

    pub fn at(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn db_file(&self) -> PathBuf {
        self.data_dir.join("healthvoice.db")
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.data_dir.join("reports")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_paths_env_override() {
        let temp = tempfile::TempDir::new().unwrap();
        let original = std::env::var_os(HOME_ENV);
        unsafe { std::env::set_var(HOME_ENV, temp.path()) };

        let paths = Paths::new().unwrap();
        assert_eq!(paths.data_dir, temp.path());
        assert_eq!(paths.db_file(), temp.path().join("healthvoice.db"));

        match original {
            Some(v) => unsafe { std::env::set_var(HOME_ENV, v) },
            None => unsafe { std::env::remove_var(HOME_ENV) },
        }
    }

    #[test]
    #[serial]
    fn test_paths_default_under_home() {
        let original = std::env::var_os(HOME_ENV);
        unsafe { std::env::remove_var(HOME_ENV) };

        let paths = Paths::new().unwrap();
        assert!(paths.data_dir.ends_with(".healthvoice"));

        if let Some(v) = original {
            unsafe { std::env::set_var(HOME_ENV, v) };
        }
    }

    #[test]
    fn test_file_names() {
        let paths = Paths::at(PathBuf::from("/tmp/hv"));
        assert!(paths.config_file().ends_with("config.json"));
        assert!(paths.reports_dir().ends_with("reports"));
    }
}
