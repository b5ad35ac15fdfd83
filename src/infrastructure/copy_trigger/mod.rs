//! Copy trigger infrastructure module
//!
//! Sends the copy shortcut using enigo (primary) or platform-specific
//! tools as fallback on Linux.

mod command;
mod enigo;
mod factory;
mod noop;
mod wtype;
mod xdotool;
mod ydotool;

pub use self::enigo::EnigoCopyTrigger;
pub use factory::{
    create_copy_trigger, detect_copy_tool, CopyTool, CopyToolPreference, ParseCopyToolError,
    VALID_COPY_TOOLS,
};
pub use noop::NoOpCopyTrigger;
pub use wtype::WtypeCopyTrigger;
pub use xdotool::XdotoolCopyTrigger;
pub use ydotool::YdotoolCopyTrigger;
