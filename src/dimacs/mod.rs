//! Writing the pairing problem as a DIMACS CNF file.
//!
//! [`translate_to_cnf`] produces the file that is handed to the external solver. The lower
//! level [`DimacsWriter`] can be used to write any clause stream in the same format.
mod writer;

use std::ffi::OsString;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::info;
pub use writer::read_header;
pub use writer::DimacsHeader;
pub use writer::DimacsWriter;

use crate::basic_types::PlannerError;
use crate::encodings;
use crate::encodings::ClauseCounts;
use crate::model::ProblemParameters;
use crate::model::VariableMap;
use crate::planner_assert_eq_simple;

/// The directory which holds the translation and solution files when none is given.
pub const DEFAULT_WORKING_DIR: &str = ".tmp_sat-planner";

pub const TRANSLATION_SUFFIX: &str = "translation";
pub const SOLUTION_SUFFIX: &str = "solution";

/// `<dir>/<base name of source without extension>_<suffix>.cnf`
///
/// Only builds the path; nothing is created.
pub fn artifact_path(dir: &Path, source: &Path, suffix: &str) -> PathBuf {
    let mut name = source
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(|| OsString::from("problem"));

    name.push("_");
    name.push(suffix);
    name.push(".cnf");

    dir.join(name)
}

/// The path the solver should write its answer for `cnf_path` to: a sibling of the CNF file.
pub fn solution_path(cnf_path: &Path) -> PathBuf {
    let dir = cnf_path.parent().unwrap_or_else(|| Path::new(""));
    artifact_path(dir, cnf_path, SOLUTION_SUFFIX)
}

/// Encode `parameters` into `<working_dir>/<source>_translation.cnf` and return that path.
///
/// The dimensions are validated before anything is created. The working directory is created
/// if needed. I/O errors are returned as they are; a partially written file is left behind.
pub fn translate_to_cnf(
    parameters: &ProblemParameters,
    working_dir: &Path,
) -> Result<PathBuf, PlannerError> {
    let dimensions = parameters.dimensions()?;
    let counts = ClauseCounts::new(&dimensions)?;
    let map = VariableMap::new(dimensions);
    debug!("clause counts for {dimensions:?}: {counts}");

    let path = artifact_path(working_dir, &parameters.source, TRANSLATION_SUFFIX);

    std::fs::create_dir_all(working_dir)?;
    let mut writer = DimacsWriter::new(File::create(&path)?);

    writer.comment(&format!("FILE: {}", parameters.source.display()))?;
    writer.comment(&format!(
        "Generated by {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ))?;
    writer.comment("")?;

    writer.header(DimacsHeader {
        variables: map.variable_count(),
        clauses: counts.total(),
    })?;

    encodings::emit_all(&map, &counts, &mut writer)?;

    let written = writer.finish()?;
    planner_assert_eq_simple!(written, counts.total());

    info!(
        "wrote {} variables and {} clauses to {}",
        map.variable_count(),
        written,
        path.display()
    );

    Ok(path)
}
