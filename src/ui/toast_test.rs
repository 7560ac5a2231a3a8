use super::*;

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_from_name_parses_known_names() {
    assert_eq!(Severity::from_name("info"), Severity::Info);
    assert_eq!(Severity::from_name("success"), Severity::Success);
    assert_eq!(Severity::from_name("Warning"), Severity::Warning);
    assert_eq!(Severity::from_name(" error "), Severity::Error);
}

#[test]
fn severity_from_name_unknown_is_info() {
    assert_eq!(Severity::from_name("fatal"), Severity::Info);
    assert_eq!(Severity::from_name(""), Severity::Info);
}

#[test]
fn severity_colors_are_distinct() {
    let colors = [
        Severity::Info.color(),
        Severity::Success.color(),
        Severity::Warning.color(),
        Severity::Error.color(),
    ];
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(Severity::default().color(), "#1890ff");
}

// =============================================================
// ToastView
// =============================================================

#[test]
fn toast_view_class_and_background_follow_severity() {
    let view = ToastView::new("saved", Severity::Success, Duration::from_secs(3), &KitConfig::default());
    assert_eq!(view.class_name, "toast toast-success");
    assert!(view.style.contains("background: #52c41a;"));
    assert_eq!(view.message, "saved");
}

#[test]
fn toast_view_animation_exits_before_removal() {
    let view = ToastView::new("hi", Severity::Info, Duration::from_millis(3000), &KitConfig::default());
    assert!(view.style.contains("animation: slideIn 300ms, slideOut 300ms 2700ms;"));
    assert!(view.style.contains("top: 20px; right: 20px;"));
}

#[test]
fn exit_delay_saturates_for_short_toasts() {
    assert_eq!(
        exit_delay(Duration::from_millis(100), Duration::from_millis(300)),
        Duration::ZERO
    );
    assert_eq!(
        exit_delay(Duration::from_millis(1000), Duration::from_millis(300)),
        Duration::from_millis(700)
    );
}
