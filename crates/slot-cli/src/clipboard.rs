//! Hand text to a clipboard command (`pbcopy`, `wl-copy`, `xclip -selection clipboard`).

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// Run `cmd` (program plus whitespace-separated arguments) with `text` on stdin.
pub fn copy(cmd: &str, text: &str) -> Result<()> {
    let mut parts = cmd.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("empty clipboard command");
    };

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start clipboard command: {}", program))?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(e).context("Failed to write to clipboard command");
        }
    }

    let status = child.wait().context("Clipboard command did not finish")?;
    if !status.success() {
        bail!("clipboard command exited with {}", status);
    }
    Ok(())
}
