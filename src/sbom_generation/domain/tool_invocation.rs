use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Flag whose value is a secret and must be redacted in any rendering
pub const SECRET_FLAG: &str = "--github-token";

const REDACTED: &str = "***";

/// ToolInvocation - a resolved executable plus its ordered arguments
///
/// Constructed once and never mutated. `Display` and `Serialize` redact the
/// GitHub token; use [`ToolInvocation::args`] for the real values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: PathBuf,
    args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments with every secret flag value replaced by `***`
    pub fn redacted_args(&self) -> Vec<String> {
        let mut redacted = Vec::with_capacity(self.args.len());
        let mut hide_next = false;
        for arg in &self.args {
            if hide_next {
                redacted.push(REDACTED.to_string());
                hide_next = false;
            } else {
                hide_next = arg == SECRET_FLAG;
                redacted.push(arg.clone());
            }
        }
        redacted
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in self.redacted_args() {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct RedactedInvocation {
    program: String,
    args: Vec<String>,
}

impl Serialize for ToolInvocation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RedactedInvocation {
            program: self.program.display().to_string(),
            args: self.redacted_args(),
        }
        .serialize(serializer)
    }
}
