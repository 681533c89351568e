//! Module `command`
//!
//! Parses the local driver's command line into a `Command`.

/// A plugin invocation requested on the command line.
#[derive(Debug, PartialEq)]
pub enum Command {
    Mkdir(String), // Remote directory to create, with parents
    Upload {
        local: String,          // Local file holding the payload
        remote: Option<String>, // Remote directory or file path
        force: bool,            // Overwrite an existing remote file
    },
    Pwd,
    Unknown, // Unknown command or missing arguments
}

/// Parses the arguments following the program name.
///
/// Returns `Unknown` if a known command is misused.
pub fn parse_command<S: AsRef<str>>(args: &[S]) -> Command {
    let mut parts = args.iter().map(|a| a.as_ref());
    let cmd = parts.next().unwrap_or("").to_ascii_lowercase();
    let rest: Vec<&str> = parts.collect();

    match cmd.as_str() {
        "mkdir" if rest.len() == 1 => Command::Mkdir(rest[0].to_string()),
        "upload" => {
            let force = rest.iter().any(|a| *a == "-f" || *a == "--force");
            let paths: Vec<&str> = rest
                .iter()
                .copied()
                .filter(|a| *a != "-f" && *a != "--force")
                .collect();
            match paths.as_slice() {
                [local] => Command::Upload {
                    local: local.to_string(),
                    remote: None,
                    force,
                },
                [local, remote] => Command::Upload {
                    local: local.to_string(),
                    remote: Some(remote.to_string()),
                    force,
                },
                _ => Command::Unknown,
            }
        }
        "pwd" if rest.is_empty() => Command::Pwd,
        _ => Command::Unknown,
    }
}
