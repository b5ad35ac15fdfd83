//! Copy tool factory with automatic detection

use std::fmt;
use std::str::FromStr;

#[cfg(target_os = "linux")]
use std::env;
#[cfg(target_os = "linux")]
use std::path::Path;
#[cfg(target_os = "linux")]
use std::process::Stdio;

#[cfg(target_os = "linux")]
use tokio::process::Command;

use crate::application::ports::{CopyTrigger, CopyTriggerError};

use super::enigo::EnigoCopyTrigger;
#[cfg(target_os = "linux")]
use super::wtype::WtypeCopyTrigger;
#[cfg(target_os = "linux")]
use super::xdotool::XdotoolCopyTrigger;
#[cfg(target_os = "linux")]
use super::ydotool::YdotoolCopyTrigger;

/// Available copy tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTool {
    /// Cross-platform enigo library
    Enigo,
    /// Linux: ydotool (requires ydotoold daemon)
    Ydotool,
    /// Linux: wtype (Wayland native)
    Wtype,
    /// Linux: xdotool (X11)
    Xdotool,
}

impl fmt::Display for CopyTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyTool::Enigo => write!(f, "enigo"),
            CopyTool::Ydotool => write!(f, "ydotool"),
            CopyTool::Wtype => write!(f, "wtype"),
            CopyTool::Xdotool => write!(f, "xdotool"),
        }
    }
}

/// Valid copy tool values (platform-aware)
#[cfg(target_os = "linux")]
pub const VALID_COPY_TOOLS: &[&str] = &["enigo", "auto", "ydotool", "xdotool", "wtype"];

#[cfg(not(target_os = "linux"))]
pub const VALID_COPY_TOOLS: &[&str] = &["enigo"];

/// User preference for copy tool selection.
///
/// - All platforms support `Enigo` (the default).
/// - Linux additionally supports `Auto`, `Ydotool`, `Xdotool`, and `Wtype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyToolPreference {
    /// Use cross-platform enigo library (default on all platforms)
    #[default]
    Enigo,
    /// Auto-detect best native tool (Linux only)
    #[cfg(target_os = "linux")]
    Auto,
    /// Use ydotool (Linux only, requires ydotoold daemon)
    #[cfg(target_os = "linux")]
    Ydotool,
    /// Use xdotool (Linux only, X11)
    #[cfg(target_os = "linux")]
    Xdotool,
    /// Use wtype (Linux only, Wayland native)
    #[cfg(target_os = "linux")]
    Wtype,
}

impl fmt::Display for CopyToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyToolPreference::Enigo => write!(f, "enigo"),
            #[cfg(target_os = "linux")]
            CopyToolPreference::Auto => write!(f, "auto"),
            #[cfg(target_os = "linux")]
            CopyToolPreference::Ydotool => write!(f, "ydotool"),
            #[cfg(target_os = "linux")]
            CopyToolPreference::Xdotool => write!(f, "xdotool"),
            #[cfg(target_os = "linux")]
            CopyToolPreference::Wtype => write!(f, "wtype"),
        }
    }
}

/// Error type for parsing copy tool preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCopyToolError {
    pub value: String,
}

impl fmt::Display for ParseCopyToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid copy tool '{}'. Valid options: {}",
            self.value,
            VALID_COPY_TOOLS.join(", ")
        )
    }
}

impl std::error::Error for ParseCopyToolError {}

impl FromStr for CopyToolPreference {
    type Err = ParseCopyToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enigo" => Ok(CopyToolPreference::Enigo),
            #[cfg(target_os = "linux")]
            "auto" => Ok(CopyToolPreference::Auto),
            #[cfg(target_os = "linux")]
            "ydotool" => Ok(CopyToolPreference::Ydotool),
            #[cfg(target_os = "linux")]
            "xdotool" => Ok(CopyToolPreference::Xdotool),
            #[cfg(target_os = "linux")]
            "wtype" => Ok(CopyToolPreference::Wtype),
            _ => Err(ParseCopyToolError {
                value: s.to_string(),
            }),
        }
    }
}

/// Check if a tool binary is available using `which`
#[cfg(target_os = "linux")]
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Check if ydotool is available (binary exists AND daemon socket exists)
#[cfg(target_os = "linux")]
async fn is_ydotool_available() -> bool {
    if !is_tool_available("ydotool").await {
        return false;
    }

    // Try XDG_RUNTIME_DIR first, then /tmp
    let socket_paths = [
        env::var("XDG_RUNTIME_DIR")
            .map(|dir| format!("{}/.ydotool_socket", dir))
            .ok(),
        Some("/tmp/.ydotool_socket".to_string()),
    ];

    socket_paths
        .into_iter()
        .flatten()
        .any(|path| Path::new(&path).exists())
}

/// Detect the best available copy tool
///
/// On Windows/macOS: Always uses Enigo
/// On Linux: Priority is ydotool → wtype → xdotool → Enigo
pub async fn detect_copy_tool() -> CopyTool {
    #[cfg(not(target_os = "linux"))]
    {
        return CopyTool::Enigo;
    }

    #[cfg(target_os = "linux")]
    {
        if is_ydotool_available().await {
            return CopyTool::Ydotool;
        }

        // wtype only works inside a Wayland session
        if env::var_os("WAYLAND_DISPLAY").is_some() && is_tool_available("wtype").await {
            return CopyTool::Wtype;
        }

        if is_tool_available("xdotool").await {
            return CopyTool::Xdotool;
        }

        CopyTool::Enigo
    }
}

/// Create the adapter for a specific tool
fn create_specific_tool(tool: CopyTool) -> Box<dyn CopyTrigger> {
    match tool {
        CopyTool::Enigo => Box::new(EnigoCopyTrigger::new()),
        #[cfg(target_os = "linux")]
        CopyTool::Ydotool => Box::new(YdotoolCopyTrigger::new()),
        #[cfg(target_os = "linux")]
        CopyTool::Wtype => Box::new(WtypeCopyTrigger::new()),
        #[cfg(target_os = "linux")]
        CopyTool::Xdotool => Box::new(XdotoolCopyTrigger::new()),
        #[cfg(not(target_os = "linux"))]
        _ => Box::new(EnigoCopyTrigger::new()),
    }
}

/// Create a copy trigger using the specified preference.
///
/// Returns the adapter and the selected tool, or an error if an explicitly
/// requested tool is not installed.
///
/// On non-Linux platforms, always uses Enigo regardless of preference.
pub async fn create_copy_trigger(
    preference: CopyToolPreference,
) -> Result<(Box<dyn CopyTrigger>, CopyTool), CopyTriggerError> {
    #[cfg(not(target_os = "linux"))]
    {
        let _ = preference;
        return Ok((create_specific_tool(CopyTool::Enigo), CopyTool::Enigo));
    }

    #[cfg(target_os = "linux")]
    {
        let tool = match preference {
            CopyToolPreference::Enigo => CopyTool::Enigo,
            CopyToolPreference::Auto => detect_copy_tool().await,
            CopyToolPreference::Ydotool => {
                if !is_ydotool_available().await {
                    return Err(CopyTriggerError::ToolNotFound("ydotool".to_string()));
                }
                CopyTool::Ydotool
            }
            CopyToolPreference::Xdotool => {
                if !is_tool_available("xdotool").await {
                    return Err(CopyTriggerError::ToolNotFound("xdotool".to_string()));
                }
                CopyTool::Xdotool
            }
            CopyToolPreference::Wtype => {
                if !is_tool_available("wtype").await {
                    return Err(CopyTriggerError::ToolNotFound("wtype".to_string()));
                }
                CopyTool::Wtype
            }
        };

        Ok((create_specific_tool(tool), tool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_tool_display() {
        assert_eq!(CopyTool::Enigo.to_string(), "enigo");
        assert_eq!(CopyTool::Ydotool.to_string(), "ydotool");
        assert_eq!(CopyTool::Wtype.to_string(), "wtype");
        assert_eq!(CopyTool::Xdotool.to_string(), "xdotool");
    }

    #[test]
    fn copy_tool_preference_from_str() {
        assert_eq!(
            "ENIGO".parse::<CopyToolPreference>().unwrap(),
            CopyToolPreference::Enigo
        );
        #[cfg(target_os = "linux")]
        {
            assert_eq!(
                "auto".parse::<CopyToolPreference>().unwrap(),
                CopyToolPreference::Auto
            );
            assert_eq!(
                "wtype".parse::<CopyToolPreference>().unwrap(),
                CopyToolPreference::Wtype
            );
        }
    }

    #[test]
    fn copy_tool_preference_round_trips() {
        for name in VALID_COPY_TOOLS {
            let pref: CopyToolPreference = name.parse().unwrap();
            assert_eq!(pref.to_string(), *name);
        }
    }

    #[test]
    fn copy_tool_preference_from_str_invalid() {
        let err = "xclip".parse::<CopyToolPreference>().unwrap_err();
        assert_eq!(err.value, "xclip");
        assert!(err.to_string().contains("enigo"));
    }

    #[test]
    fn copy_tool_preference_default() {
        assert_eq!(CopyToolPreference::default(), CopyToolPreference::Enigo);
    }

    #[tokio::test]
    async fn enigo_preference_needs_no_detection() {
        let (_trigger, tool) = create_copy_trigger(CopyToolPreference::Enigo)
            .await
            .unwrap();
        assert_eq!(tool, CopyTool::Enigo);
    }

    #[test]
    fn tool_args_press_and_release_the_modifier() {
        #[cfg(target_os = "linux")]
        {
            use super::super::wtype::WTYPE_ARGS;
            use super::super::xdotool::XDOTOOL_ARGS;
            use super::super::ydotool::YDOTOOL_ARGS;

            assert_eq!(WTYPE_ARGS.first(), Some(&"-M"));
            assert_eq!(WTYPE_ARGS.get(WTYPE_ARGS.len() - 2), Some(&"-m"));
            assert_eq!(YDOTOOL_ARGS[1..], ["29:1", "46:1", "46:0", "29:0"]);
            assert!(XDOTOOL_ARGS.contains(&"ctrl+c"));
        }
    }
}
