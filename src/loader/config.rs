// Loader configuration

/// Loader configuration
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// File name suffix of command files (case-sensitive)
    pub suffix: String,
    /// Key holding PowerShell commands
    pub ps_key: String,
    /// Key holding cmd.exe commands
    pub cmd_key: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            suffix: String::from(".yml"),
            ps_key: String::from("raw_ps"),
            cmd_key: String::from("raw_cmd"),
        }
    }
}

impl LoaderConfig {
    /// Whether a file name should be parsed as a command file
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix)
    }
}
