//! Access modifiers: a value set at construction that outside code can only
//! observe through `show_number`.
//!
//! `secret_number` is private to this module. No getter or `Debug` impl
//! exposes it.

use std::io::{self, Write};

pub struct Example {
    secret_number: i32,
}

impl Example {
    pub fn new(number: i32) -> Self {
        Self {
            secret_number: number,
        }
    }

    pub fn show_number<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.secret_number)
    }
}
