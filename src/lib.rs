pub mod animals;
pub mod config;
pub mod error;
pub mod hiding;
pub mod logging;
pub mod nesting;

pub use config::{CliArgs, DemoConfig};
pub use error::{DemoError, Result};
pub use logging::{LogFormat, LoggingConfig, init_logging};

use std::io::Write;

use animals::{Dog, anonymous_animal_example, polymorphism_example};
use hiding::{Child, InstanceMethod, Parent};
use nesting::{NestedUtility, Outer};

/// Runs the demonstration sections in fixed order, writing exactly ten
/// lines to `out`. Output is deterministic: no timestamps, no
/// randomness, no external state.
pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    tracing::debug!(section = "nesting", "inner value and field hiding");
    let outer = Outer::new();
    let inner = outer.inner();
    inner.print_names(out)?;

    tracing::debug!(section = "nesting", "independent nested utility");
    let nested = NestedUtility;
    nested.print_message(out)?;

    tracing::debug!(section = "animals", "polymorphic dispatch");
    let dog = Dog;
    polymorphism_example(&dog, out)?;

    tracing::debug!(section = "animals", "non-overridable inherent method");
    let resting_dog = Dog;
    resting_dog.sleep(out)?;

    tracing::debug!(section = "hiding", "static vs dynamic resolution");
    // The type path at the call site picks the associated function; the
    // trait object picks the instance method by runtime type.
    Parent::static_method(out)?;
    Child::static_method(out)?;
    let child_as_parent: &dyn InstanceMethod = &Child;
    child_as_parent.instance_method(out)?;

    tracing::debug!(section = "animals", "anonymous one-off variant");
    anonymous_animal_example(out)?;

    Ok(())
}
