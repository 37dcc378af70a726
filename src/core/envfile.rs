//! Dotenv file codec and merge.
//!
//! The `.env` format handled here is deliberately minimal: newline-separated
//! `KEY=value` lines, no quoting, no escaping. A value containing `=` is kept
//! whole (only the first `=` splits); a value containing a newline corrupts
//! parsing on the next read. Lines without `=` are skipped, not errors.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Ordered `key=value` entries backing a dotenv-style file.
///
/// Keys are unique. Entries keep insertion order on write, but the order
/// carries no meaning. Setting an existing key replaces its value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse dotenv text into ordered entries.
    ///
    /// A line qualifies as an entry only if it contains `=`. The segment
    /// before the first `=` is the key, the remainder is the value, verbatim.
    /// Duplicate keys overwrite earlier values (the first occurrence keeps
    /// its position).
    pub fn parse(contents: &str) -> Self {
        let mut env = Self::new();
        for line in contents.lines() {
            if let Some((key, value)) = line.split_once('=') {
                env.set(key, value);
            }
        }
        env
    }

    /// Load entries from a file. A missing file is an empty store.
    pub fn load(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Self::parse(&contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no existing env file");
                Ok(Self::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Set a key, replacing the value in place if the key already exists.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Overlay `pairs` onto the existing entries. New values win on key
    /// collision; unrelated existing keys are preserved.
    pub fn merge<'p>(&mut self, pairs: impl IntoIterator<Item = (&'p str, &'p str)>) {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize back to dotenv text: `key=value` lines joined by newlines,
    /// no trailing newline.
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the full serialized store to `path`, replacing the file.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        debug!(path = %path.display(), entries = self.entries.len(), "writing env file");
        fs::write(path, self.serialize())
    }
}

/// Make sure `.env` is covered by the `.gitignore` next to it.
///
/// Creates the file or appends an entry as needed. Returns whether anything
/// was written.
pub fn ensure_gitignored(dir: &Path) -> io::Result<bool> {
    let gitignore = dir.join(".gitignore");
    let contents = match fs::read_to_string(&gitignore) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    if contents.lines().any(|l| l.trim() == ".env") {
        return Ok(false);
    }

    let mut updated = contents;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(".env\n");
    fs::write(&gitignore, updated)?;
    Ok(true)
}
