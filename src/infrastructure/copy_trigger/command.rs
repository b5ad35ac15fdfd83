//! Shared runner for command line key injection tools

use std::process::Stdio;

use tokio::process::Command;

use crate::application::ports::CopyTriggerError;

/// Run `program` with `args`, mapping a missing binary to `ToolNotFound`
pub(super) async fn run_tool(program: &str, args: &[&str]) -> Result<(), CopyTriggerError> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CopyTriggerError::ToolNotFound(program.to_string())
            } else {
                CopyTriggerError::TriggerFailed(e.to_string())
            }
        })?;

    if !status.success() {
        return Err(CopyTriggerError::TriggerFailed(format!(
            "{} exited with status: {}",
            program, status
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_tool_not_found() {
        let err = run_tool("alt-scribe-no-such-tool", &[]).await.unwrap_err();
        assert!(matches!(err, CopyTriggerError::ToolNotFound(name) if name == "alt-scribe-no-such-tool"));
    }
}
