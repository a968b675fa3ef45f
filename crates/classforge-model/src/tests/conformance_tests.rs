use super::*;
use crate::class_builder::define_class;
use crate::descriptor::ClassDescriptor;
use crate::value::Value;

fn interface(name: &str, methods: &[(&str, Arity)]) -> Arc<ClassType> {
    let mut descriptor = ClassDescriptor::new().name(name);
    for &(method, arity) in methods {
        descriptor = descriptor.method(method, arity, |_, _| Ok(Value::Undefined));
    }
    define_class(descriptor).unwrap()
}

#[test]
fn test_matching_methods_conform() {
    let iface = interface("Drawable", &[("draw", 1), ("hide", 0)]);
    let class = interface("Sprite", &[("draw", 1), ("hide", 0), ("move", 2)]);

    assert!(conforms_to(&class, &iface));
    assert_eq!(find_capability_gap(&class, &iface), None);
    assert!(check_capabilities(&class, [&iface]).is_ok());
}

#[test]
fn test_missing_method_reported() {
    let iface = interface("Drawable", &[("draw", 1), ("hide", 0)]);
    let class = interface("Sprite", &[("draw", 1)]);

    let gap = find_capability_gap(&class, &iface).unwrap();
    assert_eq!(gap.member, "hide");
    assert_eq!(gap.expected_arity, 0);
    assert_eq!(gap.found, ProvidedMember::Missing);
}

#[test]
fn test_first_gap_in_declaration_order_reported() {
    let iface = interface("Playable", &[("play", 0), ("pause", 0), ("stop", 1)]);
    let class = interface("Tape", &[("play", 0), ("stop", 2)]);

    let gap = find_capability_gap(&class, &iface).unwrap();
    assert_eq!(gap.member, "pause");
    assert_eq!(gap.found, ProvidedMember::Missing);

    let err = check_capabilities(&class, [&iface]).unwrap_err();
    assert_eq!(err.member(), Some("pause"));
}

#[test]
fn test_arity_mismatch_reported() {
    let iface = interface("Drawable", &[("draw", 2)]);
    let class = interface("Sprite", &[("draw", 1)]);

    let gap = find_capability_gap(&class, &iface).unwrap();
    assert_eq!(gap.found, ProvidedMember::Arity(1));
    assert!(!conforms_to(&class, &iface));
}

#[test]
fn test_field_does_not_satisfy_method() {
    let iface = interface("Drawable", &[("draw", 0)]);
    let class = define_class(ClassDescriptor::new().name("Sprite").field("draw", true)).unwrap();

    let gap = find_capability_gap(&class, &iface).unwrap();
    assert_eq!(gap.found, ProvidedMember::NotCallable);
}

#[test]
fn test_source_fields_are_not_required() {
    let iface = define_class(
        ClassDescriptor::new()
            .name("Tagged")
            .field("tag", "x")
            .method("label", 0, |_, _| Ok(Value::Undefined)),
    )
    .unwrap();
    let class = interface("Item", &[("label", 0)]);

    assert!(conforms_to(&class, &iface));
}

#[test]
fn test_inherited_method_satisfies_requirement() {
    let iface = interface("Drawable", &[("draw", 1)]);
    let base = interface("Base", &[("draw", 1)]);
    let class = define_class(ClassDescriptor::new().name("Sprite").extend(&base)).unwrap();

    assert!(conforms_to(&class, &iface));
}

#[test]
fn test_inherited_requirements_are_checked() {
    let root_iface = interface("Shape", &[("area", 0)]);
    let iface = define_class(
        ClassDescriptor::new()
            .name("Polygon")
            .extend(&root_iface)
            .method("sides", 0, |_, _| Ok(Value::Undefined)),
    )
    .unwrap();
    let class = interface("Square", &[("sides", 0)]);

    let gap = find_capability_gap(&class, &iface).unwrap();
    assert_eq!(gap.member, "area");
}

#[test]
fn test_check_stops_at_first_source() {
    let first = interface("First", &[("alpha", 0)]);
    let second = interface("Second", &[("beta", 0)]);
    let class = interface("Nothing", &[]);

    let err = check_capabilities(&class, [&first, &second]).unwrap_err();
    match err {
        BuildError::CapabilityMismatch {
            class,
            source_class,
            member,
            ..
        } => {
            assert_eq!(class.as_deref(), Some("Nothing"));
            assert_eq!(source_class.as_deref(), Some("First"));
            assert_eq!(&*member, "alpha");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_source_always_conforms() {
    let class = interface("Anything", &[]);
    assert!(conforms_to(&class, &ClassType::root()));
}
