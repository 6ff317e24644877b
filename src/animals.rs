//! The `Animal` capability set and the dispatch demonstrations built on
//! top of it: runtime polymorphism through a trait object, a
//! non-overridable inherent method, and a one-off anonymous variant.

use std::io::Write;

use crate::error::Result;

/// Capability set every animal variant must satisfy. `sound` is
/// mandatory; `eat` carries a default implementation that variants may
/// override.
pub trait Animal {
    fn sound(&self, out: &mut dyn Write) -> Result<()>;

    fn eat(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "This animal is eating.")?;
        Ok(())
    }
}

/// Concrete animal variant. Rust structs are closed to inheritance, so
/// the type is final by construction.
pub struct Dog;

impl Animal for Dog {
    fn sound(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Dog barks.")?;
        Ok(())
    }

    fn eat(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Dog is eating.")?;
        Ok(())
    }
}

impl Dog {
    /// Inherent method, not part of the `Animal` vtable: nothing can
    /// override it, the moral equivalent of a final method.
    pub fn sleep(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Dog is sleeping.")?;
        Ok(())
    }
}

/// Invokes `sound` then `eat` through the trait object. Both calls
/// resolve to the runtime variant's implementation regardless of the
/// declared type of the reference, for any `Animal` implementor.
pub fn polymorphism_example(animal: &dyn Animal, out: &mut dyn Write) -> Result<()> {
    animal.sound(out)?;
    animal.eat(out)?;
    Ok(())
}

/// One-off variant declared inside the function body, the closest Rust
/// rendering of an anonymous class: the type is invisible outside this
/// scope and inherits the default `eat`. Only `sound` is exercised.
pub fn anonymous_animal_example(out: &mut dyn Write) -> Result<()> {
    struct AnonymousCat;

    impl Animal for AnonymousCat {
        fn sound(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Cat meows.")?;
            Ok(())
        }
    }

    let cat: &dyn Animal = &AnonymousCat;
    cat.sound(out)
}
