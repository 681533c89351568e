//! Host environment
//!
//! Per-call values the plugin host supplies: the remote path separator and
//! the current remote working directory. Both are passed explicitly to every
//! plugin instead of living in global state.

/// Remote platform family, derived from the path separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn from_separator(separator: &str) -> Self {
        if separator == "\\" {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Context shared by every plugin invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub path_sep: String,
    pub pwd: String,
    pub platform: Platform,
}

impl Environment {
    pub fn new(path_sep: impl Into<String>, pwd: impl Into<String>) -> Self {
        let path_sep = path_sep.into();
        let platform = Platform::from_separator(&path_sep);
        Self {
            path_sep,
            pwd: pwd.into(),
            platform,
        }
    }

    /// Whether `path` is absolute on the remote platform
    pub fn is_absolute(&self, path: &str) -> bool {
        if path.starts_with(self.path_sep.as_str()) {
            return true;
        }
        self.platform == Platform::Windows && drive_prefix(path).is_some()
    }

    /// Joins a relative remote path onto the working directory.
    pub fn absolute(&self, path: &str) -> String {
        if self.is_absolute(path) {
            return path.to_string();
        }
        let mut joined = self.pwd.clone();
        if !joined.ends_with(self.path_sep.as_str()) {
            joined.push_str(&self.path_sep);
        }
        joined.push_str(path);
        joined
    }

    /// Splits a remote path into its drive root and path elements.
    ///
    /// The drive is empty on Unix and `"X:"` on Windows. Empty and `.`
    /// elements are dropped, `..` removes the preceding element.
    pub fn split_remote_path(&self, path: &str) -> (String, Vec<String>) {
        let absolute = self.absolute(path);

        let (drive, rest) = match self.platform {
            Platform::Windows => match drive_prefix(&absolute) {
                Some(drive) => (drive.to_string(), &absolute[drive.len()..]),
                None => (String::new(), absolute.as_str()),
            },
            Platform::Unix => (String::new(), absolute.as_str()),
        };

        let mut elems: Vec<String> = Vec::new();
        for elem in rest.split(self.path_sep.as_str()) {
            match elem {
                "" | "." => {}
                ".." => {
                    elems.pop();
                }
                other => elems.push(other.to_string()),
            }
        }
        (drive, elems)
    }
}

fn drive_prefix(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        Some(&path[..2])
    } else {
        None
    }
}
