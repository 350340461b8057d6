//! End-to-end flows through the picker controller and file-backed storage.

use tempfile::TempDir;

use huepick::models::RgbColor;
use huepick::services::{ColorPicker, CustomColorError};
use huepick::storage::JsonFileStore;

fn picker_at(dir: &TempDir) -> ColorPicker {
    let store = JsonFileStore::open(dir.path().join("storage.json")).unwrap();
    ColorPicker::new(Box::new(store))
}

#[test]
fn full_editing_session() {
    let dir = TempDir::new().unwrap();
    let mut picker = picker_at(&dir);

    // Startup shows the default color
    assert_eq!(picker.current_codes().hex, "DDDEEE");
    assert_eq!(picker.current_codes().rgb, "rgb(221, 222, 238)");

    // Type a hex color, pick a preset, roll a random color
    picker.set_hex_input("ff8a80").unwrap();
    picker.select_swatch("#03A9F4").unwrap();
    let random = picker.random_color();
    assert_eq!(random.hex, picker.current().to_hex());

    // Walk all the way back, then forward again
    assert_eq!(picker.undo(), Some(RgbColor::new(3, 169, 244)));
    assert_eq!(picker.undo(), Some(RgbColor::new(255, 138, 128)));
    assert_eq!(picker.undo(), Some(RgbColor::default()));
    assert_eq!(picker.undo(), None);

    assert_eq!(picker.redo(), Some(RgbColor::new(255, 138, 128)));
    assert_eq!(picker.redo(), Some(RgbColor::new(3, 169, 244)));
    assert!(picker.can_redo());

    // Picking a fresh color abandons the remaining redo branch
    picker.set_hex_input("123456").unwrap();
    assert!(!picker.can_redo());
    assert_eq!(picker.redo(), None);
}

#[test]
fn custom_colors_survive_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut picker = picker_at(&dir);
        picker.set_hex_input("ff0000").unwrap();
        picker.save_current_as_custom().unwrap();
        picker.add_custom_color("#00ff00").unwrap();
    }

    // A fresh picker over the same storage file sees the saved colors,
    // newest first, in canonical form
    let picker = picker_at(&dir);
    assert_eq!(picker.custom_colors(), &["#00FF00", "#FF0000"]);

    // History does not survive a restart
    assert!(!picker.can_undo());
    assert!(!picker.can_redo());
    assert_eq!(picker.current(), RgbColor::default());
}

#[test]
fn removal_persists_and_absent_removal_is_noop() {
    let dir = TempDir::new().unwrap();

    {
        let mut picker = picker_at(&dir);
        picker.add_custom_color("#111111").unwrap();
        picker.add_custom_color("#222222").unwrap();
        assert!(picker.remove_custom_color("#111111").unwrap());
        assert!(!picker.remove_custom_color("#ABCDEF").unwrap());
    }

    let picker = picker_at(&dir);
    assert_eq!(picker.custom_colors(), &["#222222"]);
}

#[test]
fn duplicate_save_leaves_persisted_list_unchanged() {
    let dir = TempDir::new().unwrap();

    {
        let mut picker = picker_at(&dir);
        picker.set_hex_input("aa00aa").unwrap();
        picker.save_current_as_custom().unwrap();

        let err = picker.save_current_as_custom().unwrap_err();
        assert!(matches!(err, CustomColorError::AlreadyExists(_)));
    }

    let picker = picker_at(&dir);
    assert_eq!(picker.custom_colors(), &["#AA00AA"]);
}

#[test]
fn capacity_eviction_is_persisted() {
    let dir = TempDir::new().unwrap();

    {
        let mut picker = picker_at(&dir);
        for i in 0..25u32 {
            picker.add_custom_color(&format!("{:06X}", i)).unwrap();
        }
    }

    let picker = picker_at(&dir);
    assert_eq!(picker.custom_colors().len(), 24);
    // The very first color was evicted by the 25th
    assert_eq!(picker.custom_colors()[0], "#000018");
    assert!(!picker.custom_colors().contains(&"#000000".to_string()));
}
