//! Classes and objects: a type with a public field and one behaviour.

use std::io::{self, Write};

/// A named person who can introduce themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The greeting `introduce` writes, without the trailing newline.
    pub fn greeting(&self) -> String {
        format!("Hi, I'm {}", self.name)
    }

    pub fn introduce<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.greeting())
    }
}
