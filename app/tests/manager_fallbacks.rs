//! Accessor behavior before the global theme manager is initialized.
//!
//! Kept in its own integration test binary so the process really has no
//! initialized manager.

use hearth::theme::ThemeManager;

#[test]
fn accessors_fall_back_when_uninitialized() {
    let palette = ThemeManager::current_palette();
    assert_eq!(palette.primary, ThemeManager::primary());
    assert_eq!(palette.secondary, ThemeManager::secondary());
    assert_eq!(palette.background, ThemeManager::background());
    assert_eq!(palette.surface, ThemeManager::surface());
    assert_eq!(palette.primary, palette.secondary);
    assert_eq!(ThemeManager::revision(), 0);
}
