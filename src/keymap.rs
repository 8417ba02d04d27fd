// Keyboard shortcuts -> drawing commands.

use crate::tool::ToolKind;
use minifb::Key;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Ctrl on Windows/Linux, Cmd on macOS; either counts.
    pub command: bool,
    pub shift: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Undo,
    Redo,
    ClearAll,
    SelectTool(ToolKind),
    NarrowerStroke,
    WiderStroke,
    NextColor,
    /// Cancel an active gesture, otherwise quit.
    Escape,
}

/// Map one freshly pressed key plus the held modifiers to a command.
pub fn command_for(key: Key, mods: Modifiers) -> Option<Command> {
    if mods.command {
        return match key {
            Key::Z if mods.shift => Some(Command::Redo),
            Key::Z => Some(Command::Undo),
            Key::Y => Some(Command::Redo),
            _ => None,
        };
    }
    match key {
        Key::B => Some(Command::SelectTool(ToolKind::Brush)),
        Key::E => Some(Command::SelectTool(ToolKind::Eraser)),
        Key::R => Some(Command::SelectTool(ToolKind::Rectangle)),
        Key::S => Some(Command::SelectTool(ToolKind::Square)),
        Key::C => Some(Command::SelectTool(ToolKind::Circle)),
        Key::Delete | Key::Backspace => Some(Command::ClearAll),
        Key::LeftBracket => Some(Command::NarrowerStroke),
        Key::RightBracket => Some(Command::WiderStroke),
        Key::Tab => Some(Command::NextColor),
        Key::Escape => Some(Command::Escape),
        _ => None,
    }
}
