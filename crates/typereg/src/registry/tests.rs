// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry tests. Every test declares its own types: the registry is
//! process-wide and tests run in parallel.

use super::*;
use crate::descriptor::{EnumItem, NumericKind};
use crate::{get_type, lookup, reflect_class, reflect_enum, registrar};

#[test]
fn test_singleton_identity() {
    enum Level {}
    struct Config;
    reflect_enum!(Level);
    reflect_class!(Config);

    assert_eq!(get_type::<i64>(), get_type::<i64>());
    assert_eq!(get_type::<Level>(), get_type::<Level>());
    assert_eq!(get_type::<Config>(), get_type::<Config>());
    assert!(get_type::<Config>().ptr_eq(registrar::<Config>().info()));
    assert_ne!(get_type::<i32>(), get_type::<i64>());
}

#[test]
fn test_numeric_name_table() {
    let cases: [(TypeRef, &str, bool); 10] = [
        (get_type::<char>(), "Char", false),
        (get_type::<i8>(), "Char", true),
        (get_type::<u8>(), "Char", false),
        (get_type::<i32>(), "Int32", true),
        (get_type::<u32>(), "Int32", false),
        (get_type::<i64>(), "Int64", true),
        (get_type::<f32>(), "Float", true),
        (get_type::<f64>(), "Double", true),
        (get_type::<()>(), "Void", false),
        (get_type::<bool>(), "Bool", false),
    ];

    for (ty, name, signed) in cases {
        assert_eq!(ty.name(), name);
        assert_eq!(ty.kind(), Kind::Numeric);
        let numeric = ty.as_numeric().expect("numeric");
        assert_eq!(numeric.is_signed(), signed, "{}", ty.rust_name());
    }

    #[cfg(target_pointer_width = "64")]
    let pointer_width = "Int64";
    #[cfg(not(target_pointer_width = "64"))]
    let pointer_width = "Int32";
    for (ty, signed) in [(get_type::<isize>(), true), (get_type::<usize>(), false)] {
        assert_eq!(ty.name(), pointer_width);
        assert_eq!(ty.as_numeric().map(|n| n.is_signed()), Some(signed));
    }

    assert_eq!(get_type::<i16>().name(), "Unknown");
    assert_eq!(
        get_type::<u128>().as_numeric().map(|n| n.numeric_kind()),
        Some(NumericKind::Unknown)
    );
}

#[test]
fn test_same_kind_primitives_have_distinct_slots() {
    // i32 and u32 share a name but are different types
    assert_eq!(get_type::<i32>().name(), get_type::<u32>().name());
    assert_ne!(get_type::<i32>(), get_type::<u32>());
}

#[test]
fn test_downcast_through_handle() {
    enum Flag {}
    struct Holder;
    reflect_enum!(Flag);
    reflect_class!(Holder);

    for ty in [get_type::<u8>(), get_type::<Flag>(), get_type::<Holder>()] {
        let hits = [
            ty.as_numeric().is_some(),
            ty.as_enum().is_some(),
            ty.as_class().is_some(),
        ];
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert_eq!(ty.read().kind(), ty.kind());
    }
}

#[test]
fn test_enum_round_trip() {
    #[allow(dead_code)]
    enum TestEnum {
        Val1 = 1,
        Val2 = 2,
    }
    reflect_enum!(TestEnum);

    registrar::<TestEnum>()
        .regist("TestEnum")
        .add("val1", TestEnum::Val1 as i64)
        .add("val2", TestEnum::Val2 as i64);

    let ty = get_type::<TestEnum>();
    assert_eq!(ty.name(), "TestEnum");
    let info = ty.as_enum().expect("enum");
    assert_eq!(
        info.items(),
        [EnumItem::new("val1", 1), EnumItem::new("val2", 2)]
    );
}

#[test]
fn test_unregistered_lookup_returns_placeholder() {
    enum Never {}
    struct Ghost;
    reflect_enum!(Never);
    reflect_class!(Ghost);

    let e = get_type::<Never>();
    assert_eq!(e.name(), "Unknown-Enum");
    assert!(e.as_enum().expect("enum").items().is_empty());

    let c = get_type::<Ghost>();
    assert_eq!(c.name(), "Unknown-Class");
    let class = c.as_class().expect("class");
    assert!(class.variables().is_empty());
    assert!(class.functions().is_empty());
}

#[test]
fn test_class_member_ordering() {
    struct Wheel;
    struct Car;
    reflect_class!(Wheel, Car);

    // Member types are created in the opposite order of the members
    let _ = get_type::<Wheel>();
    let _ = get_type::<f64>();

    registrar::<Car>()
        .regist("Car")
        .add_variable::<f64>("speed")
        .add_variable::<Wheel>("front")
        .add_function::<fn() -> bool>("start")
        .add_function::<fn(f64)>("accelerate");

    let car = get_type::<Car>();
    let class = car.as_class().expect("class");
    let vars: Vec<&str> = class.variables().iter().map(|v| v.name()).collect();
    let funcs: Vec<&str> = class.functions().iter().map(|f| f.name()).collect();
    assert_eq!(vars, ["speed", "front"]);
    assert_eq!(funcs, ["start", "accelerate"]);
    assert_eq!(class.variables()[1].type_ref(), get_type::<Wheel>());
}

#[test]
fn test_function_arity() {
    struct Robot;
    reflect_class!(Robot);

    registrar::<Robot>()
        .regist("Robot")
        .add_function::<fn()>("halt")
        .add_function::<fn(i32, f32, Robot) -> i64>("move_to");

    let robot = get_type::<Robot>();
    let class = robot.as_class().expect("class");

    let halt = class.function("halt").expect("halt");
    assert!(halt.param_types().is_empty());
    assert_eq!(
        halt.return_type().as_numeric().map(|n| n.numeric_kind()),
        Some(NumericKind::Void)
    );

    let move_to = class.function("move_to").expect("move_to");
    assert_eq!(
        move_to.param_types(),
        [get_type::<i32>(), get_type::<f32>(), robot]
    );
    assert_eq!(move_to.return_type(), get_type::<i64>());
}

#[test]
fn test_class_unregist_resets_to_placeholder() {
    struct Sensor {
        value: f32,
    }
    reflect_class!(Sensor);

    registrar::<Sensor>()
        .regist("Sensor")
        .add_field("value", |s| &s.value)
        .add_function::<fn() -> f32>("read");
    assert_eq!(get_type::<Sensor>().name(), "Sensor");

    registrar::<Sensor>().unregist();

    let ty = get_type::<Sensor>();
    assert_eq!(ty.name(), "Unknown-Class");
    let class = ty.as_class().expect("class");
    assert!(class.variables().is_empty());
    assert!(class.functions().is_empty());
    assert!(!class.is_registered());
}

#[test]
fn test_enum_unregist_resets_to_placeholder() {
    enum Phase {}
    reflect_enum!(Phase);

    registrar::<Phase>().regist("Phase").add("Init", 0);
    registrar::<Phase>().unregist();

    let ty = get_type::<Phase>();
    assert_eq!(ty.name(), "Unknown-Enum");
    assert!(ty.as_enum().expect("enum").items().is_empty());
}

#[test]
fn test_reregist_replaces_descriptor() {
    enum Priority {}
    struct Job;
    reflect_enum!(Priority);
    reflect_class!(Job);

    registrar::<Priority>().regist("Priority").add("Low", 0).add("High", 1);
    registrar::<Priority>().regist("Urgency").add("Now", 9);

    let ty = get_type::<Priority>();
    assert_eq!(ty.name(), "Urgency");
    assert_eq!(ty.as_enum().expect("enum").items(), [EnumItem::new("Now", 9)]);

    registrar::<Job>().regist("Job").add_variable::<i32>("id");
    registrar::<Job>().regist("Task");
    let job = get_type::<Job>();
    assert_eq!(job.name(), "Task");
    assert!(job.as_class().expect("class").variables().is_empty());
}

#[test]
fn test_items_added_before_regist_are_kept() {
    enum Axis {}
    reflect_enum!(Axis);

    registrar::<Axis>().add("X", 0).regist("Axis").add("Y", 1);

    let items: Vec<i64> = get_type::<Axis>()
        .as_enum()
        .expect("enum")
        .items()
        .iter()
        .map(|i| i.value)
        .collect();
    assert_eq!(items, [0, 1]);
}

#[test]
fn test_try_regist_rejects_duplicate() {
    enum Channel {}
    struct Port;
    reflect_enum!(Channel);
    reflect_class!(Port);

    assert!(registrar::<Channel>().try_regist("Channel").is_ok());
    let err = registrar::<Channel>()
        .try_regist("Other")
        .map(|_| ())
        .expect_err("duplicate");
    match err {
        Error::AlreadyRegistered { name, rust_type } => {
            assert_eq!(name, "Channel");
            assert!(rust_type.ends_with("Channel"));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(get_type::<Channel>().name(), "Channel");

    registrar::<Port>()
        .try_regist("Port")
        .expect("first registration")
        .add_variable::<u16>("number");
    assert!(registrar::<Port>().try_regist("Port").is_err());
    assert_eq!(
        get_type::<Port>().as_class().expect("class").variables().len(),
        1
    );
}

#[test]
fn test_references_resolve_to_referent() {
    struct Node;
    reflect_class!(Node);

    assert_eq!(get_type::<&Node>(), get_type::<Node>());
    assert_eq!(get_type::<&mut Node>(), get_type::<Node>());
    assert_eq!(get_type::<&&f32>(), get_type::<f32>());
}

#[test]
fn test_trivial_types_have_no_descriptor() {
    assert!(lookup::<*const u8>().is_none());
    assert!(lookup::<*mut String>().is_none());
    assert!(lookup::<fn(i32) -> i32>().is_none());
    assert_eq!(registrar::<*const f64>(), TrivialFactory::instance());
    assert_eq!(lookup::<f64>(), Some(get_type::<f64>()));
}

#[test]
fn test_string_is_class_category() {
    let ty = get_type::<String>();
    assert_eq!(ty.kind(), Kind::Class);
    assert!(ty.as_class().is_some());
}

#[test]
fn test_registered_types_and_find_by_name() {
    enum Compass {}
    reflect_enum!(Compass);
    registrar::<Compass>().regist("CompassForFindTest");

    let all = registered_types();
    let compass = get_type::<Compass>();
    assert!(all.contains(&compass));
    assert!(registered_count(Kind::Enum) >= 1);

    assert_eq!(find_by_name("CompassForFindTest"), Ok(compass));
    assert_eq!(
        find_by_name("NoSuchTypeAnywhere"),
        Err(Error::UnknownType("NoSuchTypeAnywhere".to_string()))
    );
}

#[test]
fn test_self_referential_class_display() {
    struct Tree {
        weight: f64,
    }
    reflect_class!(Tree);

    registrar::<Tree>()
        .regist("Tree")
        .add_field("weight", |t| &t.weight)
        .add_function::<fn(Tree) -> bool>("graft");

    let tree = get_type::<Tree>();
    assert_eq!(
        tree.to_string(),
        "class Tree { Double weight; Bool graft(Tree); }"
    );
    assert!(format!("{:?}", tree).starts_with("TypeRef(class "));
}

#[test]
fn test_add_field_on_generic_wrapper() {
    struct Wrapper<T> {
        inner: T,
        label: String,
    }
    reflect_class!(Wrapper<u32>, Wrapper<Vec<u8>>);

    registrar::<Wrapper<u32>>()
        .regist("WrapperU32")
        .add_field("inner", |w| &w.inner)
        .add_field("label", |w| &w.label);
    registrar::<Wrapper<Vec<u8>>>()
        .regist("WrapperBytes")
        .add_field("inner", |w| &w.inner);

    let small = get_type::<Wrapper<u32>>();
    let bytes = get_type::<Wrapper<Vec<u8>>>();
    assert_ne!(small, bytes);

    let class = small.as_class().expect("class");
    assert_eq!(class.variables()[0].type_ref(), get_type::<u32>());
    assert_eq!(class.variables()[1].type_ref(), get_type::<String>());

    let class = bytes.as_class().expect("class");
    assert_eq!(class.variables()[0].type_ref(), get_type::<Vec<u8>>());
}

#[test]
fn test_std_containers_are_classes() {
    let containers = [
        get_type::<str>(),
        get_type::<Vec<i32>>(),
        get_type::<Option<f64>>(),
        get_type::<std::result::Result<u8, String>>(),
        get_type::<std::collections::HashMap<String, i64>>(),
        get_type::<std::collections::BTreeSet<char>>(),
        get_type::<[f32; 3]>(),
        get_type::<[u16]>(),
        get_type::<(i32, bool)>(),
    ];

    for ty in containers {
        assert_eq!(ty.kind(), Kind::Class, "{}", ty.rust_name());
        assert!(ty.as_class().is_some());
    }

    assert_ne!(get_type::<Vec<i32>>(), get_type::<Vec<i64>>());
    assert_eq!(get_type::<&[u16]>(), get_type::<[u16]>());
    assert_ne!(get_type::<str>(), get_type::<String>());
}

#[test]
fn test_smart_pointers_have_no_descriptor() {
    assert!(lookup::<Box<f64>>().is_none());
    assert!(lookup::<std::rc::Rc<str>>().is_none());
    assert!(lookup::<std::sync::Arc<Vec<u8>>>().is_none());
}

#[test]
fn test_std_container_registration() {
    registrar::<Vec<(u8, char)>>()
        .regist("PairList")
        .add_function::<fn() -> i64>("len")
        .add_function::<fn(u8, char)>("push");

    let ty = get_type::<Vec<(u8, char)>>();
    assert_eq!(ty.name(), "PairList");
    assert_eq!(
        ty.to_string(),
        "class PairList { Int64 len(); Void push(Char, Char); }"
    );
}
