use super::*;

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_string_form_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_parse_rejects_unknown_and_wrong_case() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_between_light_and_dark() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn icon_shows_sun_in_light_mode() {
    assert_eq!(Theme::Light.icon(), "☀");
    assert_eq!(Theme::Dark.icon(), "☾");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
