// Data types for Loader module

/// Commands collected from one scan, grouped by interpreter
///
/// Both sequences keep discovery order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSet {
    /// Commands for PowerShell (`raw_ps`)
    pub powershell: Vec<String>,
    /// Commands for cmd.exe (`raw_cmd`)
    pub cmd: Vec<String>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of commands across both categories
    pub fn len(&self) -> usize {
        self.powershell.len() + self.cmd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powershell.is_empty() && self.cmd.is_empty()
    }

    /// Append another set after this one, category by category
    pub fn extend(&mut self, other: CommandSet) {
        self.powershell.extend(other.powershell);
        self.cmd.extend(other.cmd);
    }
}
