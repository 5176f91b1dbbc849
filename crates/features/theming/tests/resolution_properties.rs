use phub_domain::theme::{ColorMode, CreativeTheme, ModeSupport, ThemePreference};
use phub_theming::{is_forced_dark, resolve_effective_theme};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = ColorMode> {
    prop_oneof![Just(ColorMode::Light), Just(ColorMode::Dark)]
}

proptest! {
    // Purity: identical inputs yield structurally identical outputs.
    #[test]
    fn resolution_is_pure(theme in proptest::option::of(".*"), mode in any_mode()) {
        let pref = ThemePreference { theme, mode, ..ThemePreference::default() };
        prop_assert_eq!(resolve_effective_theme(&pref), resolve_effective_theme(&pref));
    }

    // Arbitrary persisted ids never panic and never produce an inconsistent mode.
    #[test]
    fn unknown_ids_behave_as_no_theme(raw in "[a-z-]{0,20}", mode in any_mode()) {
        prop_assume!(CreativeTheme::parse(&raw).is_none());
        let pref = ThemePreference { theme: Some(raw), mode, ..ThemePreference::default() };
        let effective = resolve_effective_theme(&pref);
        prop_assert_eq!(effective.mode, mode);
        let expected = match mode {
            ColorMode::Light => "github-light",
            ColorMode::Dark => "github-dark",
        };
        prop_assert_eq!(effective.highlight, expected);
    }

    // Dark-only catalog entries always force dark, whatever is stored.
    #[test]
    fn dark_only_always_renders_dark(mode in any_mode()) {
        for theme in CreativeTheme::ALL {
            if theme.mode_support() == ModeSupport::DarkOnly {
                let pref = ThemePreference {
                    theme: Some(theme.to_string()),
                    mode,
                    ..ThemePreference::default()
                };
                prop_assert_eq!(resolve_effective_theme(&pref).mode, ColorMode::Dark);
                prop_assert!(is_forced_dark(pref.theme.as_deref()));
            }
        }
    }

    // Dual-mode catalog entries always follow the stored mode.
    #[test]
    fn dual_mode_follows_stored_mode(mode in any_mode()) {
        for theme in CreativeTheme::ALL {
            if theme.mode_support() == ModeSupport::DualMode {
                let pref = ThemePreference {
                    theme: Some(theme.to_string()),
                    mode,
                    ..ThemePreference::default()
                };
                prop_assert_eq!(resolve_effective_theme(&pref).mode, mode);
                prop_assert!(!is_forced_dark(pref.theme.as_deref()));
            }
        }
    }
}
