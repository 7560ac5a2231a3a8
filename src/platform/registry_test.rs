use super::*;

use std::rc::Rc;

#[test]
fn register_hands_out_distinct_ids() {
    let registry: MountRegistry<&str, ()> = MountRegistry::new();
    let a = registry.register("toast", Vec::new());
    let b = registry.register("dialog", Vec::new());
    assert_ne!(a, b);
    assert_eq!(registry.len(), 2);
}

#[test]
fn take_unknown_id_is_none() {
    let registry: MountRegistry<&str, ()> = MountRegistry::new();
    assert!(registry.take(ElementId(7)).is_none());
    assert!(registry.is_empty());
}

#[test]
fn take_returns_element_once() {
    let registry: MountRegistry<&str, ()> = MountRegistry::new();
    let id = registry.register("overlay", Vec::new());
    let mounted = registry.take(id).expect("mounted");
    assert_eq!(mounted.element, "overlay");
    assert!(registry.take(id).is_none());
}

#[test]
fn handlers_live_until_taken_and_dropped() {
    let registry: MountRegistry<&str, Rc<()>> = MountRegistry::new();
    let cancel = Rc::new(());
    let confirm = Rc::new(());
    let id = registry.register("overlay", vec![Rc::clone(&cancel), Rc::clone(&confirm)]);
    assert_eq!(Rc::strong_count(&cancel), 2);
    assert_eq!(Rc::strong_count(&confirm), 2);

    let mounted = registry.take(id).expect("mounted");
    assert_eq!(mounted.handlers.len(), 2);
    drop(mounted);
    assert_eq!(Rc::strong_count(&cancel), 1);
    assert_eq!(Rc::strong_count(&confirm), 1);
}

#[test]
fn unclicked_handler_released_on_take() {
    // Dropping the entry of a dialog whose buttons were never used must
    // release what the handlers captured.
    let registry: MountRegistry<&str, Box<dyn FnMut()>> = MountRegistry::new();
    let captured = Rc::new(());
    let held = Rc::clone(&captured);
    let handler: Box<dyn FnMut()> = Box::new(move || {
        let _ = &held;
    });
    let id = registry.register("overlay", vec![handler]);
    assert_eq!(Rc::strong_count(&captured), 2);
    drop(registry.take(id));
    assert_eq!(Rc::strong_count(&captured), 1);
}
