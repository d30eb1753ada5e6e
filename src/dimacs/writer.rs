use std::io::BufRead;
use std::io::BufWriter;
use std::io::Write;

use crate::basic_types::Lit;
use crate::encodings::ClauseSink;
use crate::planner_assert_moderate;
use crate::planner_assert_simple;

/// The `p cnf <variables> <clauses>` line of a DIMACS document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimacsHeader {
    pub variables: u64,
    pub clauses: u64,
}

/// Writes a DIMACS CNF document: comments, then the header, then one clause per line.
///
/// The writer is buffered; call [`DimacsWriter::finish`] to flush it.
#[derive(Debug)]
pub struct DimacsWriter<W: Write> {
    writer: BufWriter<W>,
    header: Option<DimacsHeader>,
    clauses_written: u64,
}

impl<W: Write> DimacsWriter<W> {
    pub fn new(writer: W) -> Self {
        DimacsWriter {
            writer: BufWriter::new(writer),
            header: None,
            clauses_written: 0,
        }
    }

    /// Write a comment line. An empty `text` produces a bare `c` line.
    pub fn comment(&mut self, text: &str) -> std::io::Result<()> {
        if text.is_empty() {
            writeln!(self.writer, "c")
        } else {
            writeln!(self.writer, "c {text}")
        }
    }

    pub fn header(&mut self, header: DimacsHeader) -> std::io::Result<()> {
        planner_assert_simple!(self.header.is_none(), "a DIMACS document has exactly one header");

        self.header = Some(header);
        writeln!(self.writer, "p cnf {} {}", header.variables, header.clauses)
    }

    pub fn clauses_written(&self) -> u64 {
        self.clauses_written
    }

    /// Flush the document and return the number of clauses in its body.
    pub fn finish(mut self) -> std::io::Result<u64> {
        self.writer.flush()?;
        Ok(self.clauses_written)
    }
}

impl<W: Write> ClauseSink for DimacsWriter<W> {
    fn add_clause(&mut self, literals: &[Lit]) -> std::io::Result<()> {
        planner_assert_moderate!(
            self.header.is_some_and(|header| literals
                .iter()
                .all(|&literal| literal != 0 && u64::from(literal.unsigned_abs()) <= header.variables)),
            "clause {literals:?} does not fit the declared header"
        );

        for literal in literals {
            write!(self.writer, "{literal} ")?;
        }
        writeln!(self.writer, "0")?;

        self.clauses_written += 1;
        Ok(())
    }
}

/// Read the header of a DIMACS document, skipping the comment lines before it.
pub fn read_header(reader: impl BufRead) -> std::io::Result<DimacsHeader> {
    for line in reader.lines() {
        let line = line?;

        if line.starts_with('c') {
            // comment line
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        return match parts.as_slice() {
            ["p", "cnf", variables, clauses] => Ok(DimacsHeader {
                variables: parse_count(variables)?,
                clauses: parse_count(clauses)?,
            }),
            _ => Err(invalid_data(format!("expected a 'p cnf' header, found '{line}'"))),
        };
    }

    Err(invalid_data("the document has no header".to_owned()))
}

fn parse_count(word: &str) -> std::io::Result<u64> {
    word.parse()
        .map_err(|_| invalid_data(format!("'{word}' is not a valid count")))
}

fn invalid_data(message: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, message)
}
