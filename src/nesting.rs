//! Outer/inner label pair and the independent nested utility.
//!
//! The inner-class field-hiding idiom becomes an explicit relation here:
//! `Inner` carries a shared borrow of the `Outer` that created it, so
//! reaching the enclosing label is a qualified field access instead of a
//! lexical shadowing rule. The borrow checker enforces that the relation
//! is read-only for the inner value's lifetime.

use std::io::Write;

use crate::error::Result;

pub struct Outer {
    name: &'static str,
}

impl Outer {
    pub fn new() -> Self {
        Self {
            name: "Outer Class",
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Creates an inner value bound to this instance. The enclosing
    /// relation is fixed at construction and cannot be rebound.
    pub fn inner(&self) -> Inner<'_> {
        Inner {
            name: "Inner Class",
            outer: self,
        }
    }
}

impl Default for Outer {
    fn default() -> Self {
        Self::new()
    }
}

/// Nested entity owned (logically) by exactly one `Outer`. Declares a
/// same-named `name` field that hides the outer one.
pub struct Inner<'a> {
    name: &'static str,
    outer: &'a Outer,
}

impl Inner<'_> {
    /// Prints this value's own label, then the enclosing instance's
    /// label through the stored borrow.
    pub fn print_names(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Inner class name: {}", self.name)?;
        writeln!(out, "Outer class name: {}", self.outer.name())?;
        Ok(())
    }
}

/// Stateless counterpart to `Inner`: nesting in the source material does
/// not require any tie to an enclosing instance, and neither does this.
pub struct NestedUtility;

impl NestedUtility {
    pub fn print_message(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Message from static nested class.")?;
        Ok(())
    }
}
