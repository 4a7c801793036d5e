//! Constructors: the name is supplied when the value is created.

use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Student Name: {}", self.name)
    }
}
