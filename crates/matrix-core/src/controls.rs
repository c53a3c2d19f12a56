use crate::constants::KEY_ADD_BATCH;

const RAIN_PROFILE: &str = "rain";

/// User-level actions the front-end maps input onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    /// Reset, then re-seed with the demo spawns.
    Restart,
    AddBatch(usize),
    StopHold,
    NextTheme,
    SwitchDevice,
    /// Switch to a registered profile by id.
    UseProfile(&'static str),
}

impl Command {
    /// Map a `KeyboardEvent.code` to a command.
    #[inline]
    pub fn for_key(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Command::TogglePause),
            "KeyR" => Some(Command::Restart),
            "KeyA" => Some(Command::AddBatch(KEY_ADD_BATCH)),
            "Escape" => Some(Command::StopHold),
            "KeyT" => Some(Command::NextTheme),
            "KeyM" => Some(Command::SwitchDevice),
            "KeyW" => Some(Command::UseProfile(RAIN_PROFILE)),
            _ => None,
        }
    }
}

/// The device profile `SwitchDevice` flips to.
pub fn other_device_profile(current: &str) -> &'static str {
    if current == "mobile" {
        "desktop"
    } else {
        "mobile"
    }
}
