use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

/// Why a probe tool produced no usable exit status.
#[derive(Debug, Error)]
pub enum ProbeFailure {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' did not finish within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },
    #[error("'{program}' was terminated by a signal")]
    Signalled { program: String },
}

/// Exit classification and captured output of a finished tool.
#[derive(Debug, Clone)]
pub struct Completed {
    pub success: bool,
    pub output: String,
}

/// A whitespace separated command line with `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    program: String,
    args: Vec<String>,
}

impl CommandTemplate {
    /// Returns `None` for a blank template.
    pub fn parse(template: &str) -> Option<Self> {
        let mut parts = template.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Substitutes every `{key}` in the program and arguments.
    pub fn render(&self, vars: &[(&str, String)]) -> Invocation {
        let substitute = |part: &str| -> String {
            vars.iter().fold(part.to_string(), |acc, (key, value)| {
                acc.replace(&format!("{{{key}}}"), value)
            })
        };
        Invocation {
            program: substitute(self.program.as_str()),
            args: self.args.iter().map(|arg| substitute(arg.as_str())).collect(),
        }
    }
}

/// A fully rendered command, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// Spawns `invocation` and waits for it, at most `watchdog`.
///
/// The child is killed if the watchdog fires. A non-zero exit is a normal
/// outcome (`success == false`); only a failed launch, a timeout or a
/// signal-terminated child are errors.
pub async fn run(invocation: &Invocation, watchdog: Duration) -> Result<Completed, ProbeFailure> {
    trace!("Spawning {} {:?}", invocation.program, invocation.args);

    let child = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ProbeFailure::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

    let output = match timeout(watchdog, child.wait_with_output()).await {
        Ok(waited) => waited.map_err(|source| ProbeFailure::Spawn {
            program: invocation.program.clone(),
            source,
        })?,
        Err(_elapsed) => {
            return Err(ProbeFailure::TimedOut {
                program: invocation.program.clone(),
                timeout: watchdog,
            });
        }
    };

    let Some(code) = output.status.code() else {
        return Err(ProbeFailure::Signalled {
            program: invocation.program.clone(),
        });
    };

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(Completed {
        success: code == 0,
        output: text,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
