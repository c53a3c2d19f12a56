// Host-side tests for keyboard command mapping and theme cycling data.

use matrix_core::*;

#[test]
fn key_codes_map_to_commands() {
    assert_eq!(Command::for_key("Space"), Some(Command::TogglePause));
    assert_eq!(Command::for_key("KeyR"), Some(Command::Restart));
    assert_eq!(Command::for_key("KeyA"), Some(Command::AddBatch(5)));
    assert_eq!(Command::for_key("Escape"), Some(Command::StopHold));
    assert_eq!(Command::for_key("KeyT"), Some(Command::NextTheme));
    assert_eq!(Command::for_key("KeyM"), Some(Command::SwitchDevice));
    assert_eq!(Command::for_key("KeyW"), Some(Command::UseProfile("rain")));
}

#[test]
fn rain_key_names_a_registered_profile() {
    let Some(Command::UseProfile(id)) = Command::for_key("KeyW") else {
        panic!("KeyW is not a profile key");
    };
    assert!(ProfileRegistry::builtin().contains(id));
}

#[test]
fn unmapped_keys_are_ignored() {
    for code in ["KeyQ", "Enter", "ArrowUp", "a", "space", ""] {
        assert_eq!(Command::for_key(code), None, "{code}");
    }
}

#[test]
fn device_switch_flips_between_desktop_and_mobile() {
    assert_eq!(other_device_profile("desktop"), "mobile");
    assert_eq!(other_device_profile("mobile"), "desktop");
    assert_eq!(other_device_profile("rain"), "mobile");
}

#[test]
fn themes_have_unique_names_and_full_palettes() {
    let mut names: Vec<_> = THEMES.iter().map(|t| t.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), THEMES.len());
    for theme in THEMES.iter() {
        let palette = theme.palette();
        assert_eq!(palette.colors().len(), 4);
        assert_eq!(palette.colors()[0], theme.accent);
    }
}

#[test]
fn matrix_theme_is_green_on_black() {
    let matrix = &THEMES[0];
    assert_eq!(matrix.name, "MATRIX");
    assert_eq!(matrix.background, Color::BLACK);
    assert_eq!(matrix.accent.css(), "rgb(0, 255, 0)");
    assert_eq!(matrix.palette().colors()[3], Color::rgb(90, 255, 90));
}
