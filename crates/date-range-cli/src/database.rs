//! Where generated queries go.
//!
//! There is no real database yet. [`ConsoleDatabase`] only echoes the query.

use std::io::Write;

use anyhow::Result;

pub trait Database {
    fn execute(&mut self, query: &str) -> Result<()>;
}

/// Writes `sending to database: <query>` for every executed query.
pub struct ConsoleDatabase<W: Write> {
    out: W,
}

impl<W: Write> ConsoleDatabase<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Database for ConsoleDatabase<W> {
    fn execute(&mut self, query: &str) -> Result<()> {
        writeln!(self.out, "sending to database: {query}")?;
        self.out.flush()?;
        Ok(())
    }
}
