//! The seven demonstration types, one per object-oriented idea.

pub mod calculator;
pub mod car;
pub mod constants;
pub mod counter;
pub mod example;
pub mod person;
pub mod student;

pub use calculator::Calculator;
pub use car::Car;
pub use constants::{ConstantsDemo, DEFAULT_TIMESTAMP_FORMAT};
pub use counter::Counter;
pub use example::Example;
pub use person::Person;
pub use student::Student;

use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifies one lesson. Declaration order is the order lessons run in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Lesson {
    Person,
    Car,
    Calculator,
    Student,
    Example,
    Counter,
    Constants,
}

impl Lesson {
    /// Short description of the idea the lesson illustrates.
    pub fn topic(&self) -> &'static str {
        match self {
            Lesson::Person => "classes and objects",
            Lesson::Car => "properties and fields",
            Lesson::Calculator => "methods",
            Lesson::Student => "constructors",
            Lesson::Example => "access modifiers",
            Lesson::Counter => "static members",
            Lesson::Constants => "const vs readonly",
        }
    }
}
