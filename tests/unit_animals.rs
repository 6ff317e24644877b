use std::io::Write;

use oop_showcase::Result;
use oop_showcase::animals::{Animal, Dog, anonymous_animal_example, polymorphism_example};

fn capture(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("write to buffer");
    String::from_utf8(buf).expect("utf8 output")
}

#[test]
fn dog_dispatches_both_methods_through_the_trait_object() {
    let dog = Dog;
    let output = capture(|buf| polymorphism_example(&dog, buf));
    assert_eq!(output, "Dog barks.\nDog is eating.\n");
    assert!(
        !output.contains("This animal is eating."),
        "overridden eat must win over the default"
    );
}

#[test]
fn default_eat_applies_to_variants_that_do_not_override_it() {
    struct Sparrow;

    impl Animal for Sparrow {
        fn sound(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Sparrow chirps.")?;
            Ok(())
        }
    }

    let output = capture(|buf| polymorphism_example(&Sparrow, buf));
    assert_eq!(output, "Sparrow chirps.\nThis animal is eating.\n");
}

#[test]
fn sleep_is_an_inherent_method_on_dog() {
    let output = capture(|buf| Dog.sleep(buf));
    assert_eq!(output, "Dog is sleeping.\n");
}

#[test]
fn anonymous_variant_only_meows() {
    let output = capture(anonymous_animal_example);
    assert_eq!(output, "Cat meows.\n");
}
