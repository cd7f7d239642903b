// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::missing_panics_doc)] // Tests/examples panic on failure

/// Person Example for typereg
///
/// Demonstrates:
/// - Declaring enum and class categories
/// - Registering items, fields and member functions
/// - Walking a class descriptor and its member types
/// - Rendering descriptors
use typereg::{get_type, reflect_class, reflect_enum, registrar, registry, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mood {
    Happy,
    Grumpy,
}

struct Person {
    family_name: String,
    height: f32,
    is_female: bool,
    mood: Mood,
}

impl Person {
    fn introduce(&self) {
        println!(
            "Hi, I am {} ({} m, {:?})",
            self.family_name, self.height, self.mood
        );
    }

    fn is_female(&self) -> bool {
        self.is_female
    }

    fn get_married(&mut self, other: &mut Person) -> bool {
        if self.is_female() == other.is_female() {
            return false;
        }
        if self.is_female {
            self.family_name = other.family_name.clone();
        } else {
            other.family_name = self.family_name.clone();
        }
        true
    }
}

reflect_enum!(Mood);
reflect_class!(Person);

fn describe(ty: TypeRef) {
    println!("{:?}", ty);
    println!("  {}", ty);
}

fn main() {
    registrar::<Mood>()
        .regist("Mood")
        .add("Happy", Mood::Happy as i64)
        .add("Grumpy", Mood::Grumpy as i64);

    registrar::<Person>()
        .regist("Person")
        .add_field("family_name", |p| &p.family_name)
        .add_field("height", |p| &p.height)
        .add_field("is_female", |p| &p.is_female)
        .add_field("mood", |p| &p.mood)
        .add_function::<fn()>("introduce")
        .add_function::<fn() -> bool>("is_female")
        .add_function::<fn(Person) -> bool>("get_married");

    let person = get_type::<Person>();
    describe(person);

    if let Some(class) = person.as_class() {
        println!("\nMembers of {}:", class.name());
        for var in class.variables() {
            println!("  {:<12} : {}", var.name(), var.type_ref().name());
        }
        for func in class.functions() {
            let params: Vec<String> = func.param_types().iter().map(|p| p.name()).collect();
            println!(
                "  {:<12} : ({}) -> {}",
                func.name(),
                params.join(", "),
                func.return_type().name()
            );
        }
    }

    println!("\nAll descriptors:");
    for ty in registry::registered_types() {
        describe(ty);
    }

    let mut alice = Person {
        family_name: "Liddell".to_string(),
        height: 1.62,
        is_female: true,
        mood: Mood::Happy,
    };
    let mut bob = Person {
        family_name: "Carroll".to_string(),
        height: 1.80,
        is_female: false,
        mood: Mood::Grumpy,
    };
    if alice.get_married(&mut bob) {
        alice.introduce();
        bob.introduce();
    }
}
