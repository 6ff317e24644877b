//! Static-resolution vs dynamic-resolution pair.
//!
//! Class-level behavior maps onto associated functions: the call site
//! names a type path and resolution is purely lexical, so `Child`'s
//! redeclaration hides `Parent`'s only when the call is written against
//! `Child`. Instance-level behavior lives on the `InstanceMethod` trait
//! and resolves through the vtable by the runtime type of the value
//! behind the reference.

use std::io::Write;

use crate::error::Result;

pub struct Parent;

pub struct Child;

impl Parent {
    pub fn static_method(out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Static method in Parent class.")?;
        Ok(())
    }
}

impl Child {
    /// Redeclares the class-level behavior. Which version runs depends
    /// only on the type path written at the call site, never on any
    /// runtime value.
    pub fn static_method(out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Static method in Child class.")?;
        Ok(())
    }
}

pub trait InstanceMethod {
    fn instance_method(&self, out: &mut dyn Write) -> Result<()>;
}

impl InstanceMethod for Parent {
    fn instance_method(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Instance method in Parent class.")?;
        Ok(())
    }
}

impl InstanceMethod for Child {
    fn instance_method(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Instance method in Child class.")?;
        Ok(())
    }
}
