use super::*;
use crate::class_builder::define_class;
use crate::value::Value;

fn named(name: &str) -> ClassDescriptor {
    ClassDescriptor::new().name(name)
}

#[test]
fn test_define_and_get() {
    let registry = ClassRegistry::new();
    let shape = registry.define(named("Shape")).unwrap();

    let fetched = registry.get("Shape").unwrap();
    assert!(Arc::ptr_eq(&shape, &fetched));
    assert!(registry.contains("Shape"));
    assert!(!registry.contains("Circle"));
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}

#[test]
fn test_duplicate_name_rejected() {
    let registry = ClassRegistry::new();
    registry.define(named("Shape")).unwrap();

    let err = registry.define(named("Shape")).unwrap_err();
    assert_eq!(err, BuildError::DuplicateClass(Arc::from("Shape")));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_anonymous_definition_rejected() {
    let registry = ClassRegistry::new();
    assert_eq!(
        registry.define(ClassDescriptor::new()).unwrap_err(),
        BuildError::Anonymous
    );
    assert!(registry.is_empty());
}

#[test]
fn test_failed_build_is_not_registered() {
    let registry = ClassRegistry::new();
    let iface = registry
        .define(named("Runnable").method("run", 0, |_, _| Ok(Value::Undefined)))
        .unwrap();

    let result = registry.define(named("Idle").provide(&iface));
    assert!(matches!(result, Err(BuildError::CapabilityMismatch { .. })));
    assert!(!registry.contains("Idle"));
}

#[test]
fn test_insert_prebuilt_class() {
    let registry = ClassRegistry::new();
    let class = define_class(named("External")).unwrap();
    registry.insert(Arc::clone(&class)).unwrap();

    assert!(registry.contains("External"));
    assert_eq!(
        registry.insert(class).unwrap_err(),
        BuildError::DuplicateClass(Arc::from("External"))
    );
    assert_eq!(
        registry
            .insert(define_class(ClassDescriptor::new()).unwrap())
            .unwrap_err(),
        BuildError::Anonymous
    );
}

#[test]
fn test_names_and_subclasses_sorted() {
    let registry = ClassRegistry::new();
    let shape = registry.define(named("Shape")).unwrap();
    let polygon = registry.define(named("Polygon").extend(&shape)).unwrap();
    registry.define(named("Square").extend(&polygon)).unwrap();
    registry.define(named("Circle").extend(&shape)).unwrap();
    registry.define(named("Color")).unwrap();

    let names = registry.names();
    let names: Vec<&str> = names.iter().map(|n| &**n).collect();
    assert_eq!(names, vec!["Circle", "Color", "Polygon", "Shape", "Square"]);

    let subclasses = registry.subclasses_of("Shape");
    let subclasses: Vec<&str> = subclasses.iter().map(|n| &**n).collect();
    assert_eq!(subclasses, vec!["Circle", "Polygon", "Square"]);

    assert!(registry.subclasses_of("Square").is_empty());
    assert!(registry.subclasses_of("Unknown").is_empty());
}

#[test]
fn test_registry_uses_its_options() {
    let registry = ClassRegistry::with_options(BuildOptions {
        reject_reserved_members: false,
        ..BuildOptions::default()
    });
    let class = registry
        .define(named("Loose").field("classname", "ignored"))
        .unwrap();

    assert!(class.own_member("classname").is_none());
    assert!(!registry.options().reject_reserved_members);
}
