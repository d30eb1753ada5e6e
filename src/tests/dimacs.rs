#![cfg(test)]

use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::basic_types::PlannerError;
use crate::dimacs::read_header;
use crate::dimacs::translate_to_cnf;
use crate::encodings::ClauseCounts;
use crate::model::Dimensions;
use crate::model::ProblemParameters;
use crate::model::VariableMap;

fn body_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|line| !line.starts_with('c') && !line.starts_with('p'))
        .map(str::to_owned)
        .collect()
}

#[test]
fn translation_is_named_after_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let working_dir = dir.path().join("work");

    let path = translate_to_cnf(
        &ProblemParameters::new(4, 2, 3, "problems/league.json"),
        &working_dir,
    )
    .unwrap();

    assert_eq!(path, working_dir.join("league_translation.cnf"));
    assert!(path.is_file());
}

#[test]
fn comments_come_before_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = translate_to_cnf(
        &ProblemParameters::new(2, 1, 3, "league.json"),
        dir.path(),
    )
    .unwrap();

    let text = fs::read_to_string(path).unwrap();
    let lines: Vec<_> = text.lines().take(4).collect();
    let generator = format!("c Generated by sat-planner v{}", env!("CARGO_PKG_VERSION"));

    // 2 participants, 1 day, 2 available hours: 4 + 2 + 6 + 32 + 0 clauses.
    assert_eq!(
        lines,
        [
            "c FILE: league.json",
            generator.as_str(),
            "c",
            "p cnf 8 44",
        ]
    );
}

#[test]
fn header_matches_the_body() {
    let dir = tempfile::tempdir().unwrap();

    for (n, d, h) in [(2, 1, 3), (3, 2, 3), (4, 2, 3), (3, 3, 5), (5, 1, 4)] {
        let parameters = ProblemParameters::new(n, d, h, format!("p{n}_{d}_{h}.json"));
        let path = translate_to_cnf(&parameters, dir.path()).unwrap();

        let header = read_header(BufReader::new(File::open(&path).unwrap())).unwrap();
        let counts = ClauseCounts::compute(n, d, h).unwrap();
        let body = body_lines(&path);

        assert_eq!(header.clauses, counts.total());
        assert_eq!(header.clauses, body.len() as u64, "n={n} d={d} h={h}");
        assert_eq!(header.variables, u64::from(n * n * d * (h - 1)));
    }
}

#[test]
fn body_is_well_formed() {
    let dir = tempfile::tempdir().unwrap();
    let path = translate_to_cnf(&ProblemParameters::new(3, 2, 4, "league"), dir.path()).unwrap();
    let map = VariableMap::new(Dimensions::new(3, 2, 4).unwrap());

    for line in body_lines(&path) {
        let literals: Vec<i32> = line
            .split(' ')
            .map(|word| word.parse().unwrap())
            .collect();

        let (terminator, clause) = literals.split_last().unwrap();
        assert_eq!(*terminator, 0, "{line}");
        assert!(!clause.is_empty());
        assert!(clause.iter().all(|&literal| map.decode(literal).is_some()));
    }
}

#[test]
fn translation_is_reproducible() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let parameters = ProblemParameters::new(4, 3, 4, "league.json");

    let first = translate_to_cnf(&parameters, first_dir.path()).unwrap();
    let second = translate_to_cnf(&parameters, second_dir.path()).unwrap();

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn degenerate_problems_create_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let working_dir = dir.path().join("work");

    for (n, d, h) in [(1, 2, 3), (0, 1, 3), (3, 0, 3), (3, 2, 2), (3, 2, 1), (1, 0, 1)] {
        let result = translate_to_cnf(&ProblemParameters::new(n, d, h, "league.json"), &working_dir);

        assert!(
            matches!(result, Err(PlannerError::Configuration(_))),
            "n={n} d={d} h={h}"
        );
        assert!(!working_dir.exists());
    }
}

#[test]
fn filesystem_errors_are_passed_on() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("work");
    fs::write(&blocker, "not a directory").unwrap();

    let result = translate_to_cnf(&ProblemParameters::new(2, 1, 3, "league.json"), &blocker);

    assert!(matches!(result, Err(PlannerError::Filesystem(_))));
}
