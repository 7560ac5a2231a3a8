use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_empty_yields_defaults() {
    let cfg = KitConfig::from_lookup(|_| None);
    assert_eq!(cfg, KitConfig::default());
    assert_eq!(cfg.toast_duration, Duration::from_millis(3000));
    assert_eq!(cfg.toast_animation, Duration::from_millis(300));
    assert_eq!(cfg.toast_offset_px, 20);
}

#[test]
fn from_lookup_reads_numeric_overrides() {
    let cfg = KitConfig::from_lookup(lookup_from(&[
        ("CONSOLE_KIT_TOAST_DURATION_MS", "5000"),
        ("CONSOLE_KIT_TOAST_ANIMATION_MS", " 150 "),
        ("CONSOLE_KIT_TOAST_OFFSET_PX", "8"),
    ]));
    assert_eq!(cfg.toast_duration, Duration::from_millis(5000));
    assert_eq!(cfg.toast_animation, Duration::from_millis(150));
    assert_eq!(cfg.toast_offset_px, 8);
}

#[test]
fn from_lookup_bad_number_falls_back() {
    let cfg = KitConfig::from_lookup(lookup_from(&[
        ("CONSOLE_KIT_TOAST_DURATION_MS", "soon"),
        ("CONSOLE_KIT_TOAST_OFFSET_PX", "-4"),
    ]));
    assert_eq!(cfg.toast_duration, Duration::from_millis(DEFAULT_TOAST_DURATION_MS));
    assert_eq!(cfg.toast_offset_px, DEFAULT_TOAST_OFFSET_PX);
}

#[test]
fn from_lookup_reads_labels_and_skips_blank() {
    let cfg = KitConfig::from_lookup(lookup_from(&[
        ("CONSOLE_KIT_COPY_MESSAGE", "Copied!"),
        ("CONSOLE_KIT_CONFIRM_LABEL", "OK"),
        ("CONSOLE_KIT_CANCEL_LABEL", "   "),
    ]));
    assert_eq!(cfg.copy_message, "Copied!");
    assert_eq!(cfg.confirm_label, "OK");
    assert_eq!(cfg.cancel_label, DEFAULT_CANCEL_LABEL);
    assert_eq!(cfg.copy_failed_message, DEFAULT_COPY_FAILED_MESSAGE);
}
