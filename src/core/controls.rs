use super::artifacts::ArtifactKey;

/// Everything a visitor can ask the exhibition to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Enter,
    Skip,
    Select(ArtifactKey),
    Close,
    Next,
    Prev,
    ToggleNarration,
    ToggleMute,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "Enter" => Some(Command::Enter),
        "s" | "S" => Some(Command::Skip),
        "ArrowRight" => Some(Command::Next),
        "ArrowLeft" => Some(Command::Prev),
        "Escape" => Some(Command::Close),
        " " => Some(Command::ToggleNarration),
        "m" | "M" => Some(Command::ToggleMute),
        _ => None,
    }
}
