use std::collections::HashSet;
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

use crate::core::{Pid, Process};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: expected three fields (id arrival burst), found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: field {field:?} is not a valid integer: {source}")]
    BadInteger {
        line: usize,
        field: String,
        source: ParseIntError,
    },

    #[error("line {line}: duplicate process id {id}")]
    DuplicateId { line: usize, id: Pid },

    #[error("line {line}: burst time must be positive")]
    ZeroBurst { line: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads a process list from a whitespace-delimited text file.
pub fn load_processes(path: &Path) -> Result<Vec<Process>, InputError> {
    parse_processes(&fs::read_to_string(path)?)
}

/// Parses `id arrival burst` triples, one per line.
///
/// Rejects the whole input on the first malformed line; no partial list is
/// ever returned. Line numbers in errors are 1-based.
pub fn parse_processes(text: &str) -> Result<Vec<Process>, InputError> {
    let mut processes = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(InputError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let parse = |field: &str| -> Result<u64, InputError> {
            field.parse().map_err(|source| InputError::BadInteger {
                line,
                field: field.to_string(),
                source,
            })
        };
        let id = parse(fields[0])?;
        let arrival = parse(fields[1])?;
        let burst = parse(fields[2])?;

        if !seen.insert(id) {
            return Err(InputError::DuplicateId { line, id });
        }
        if burst == 0 {
            return Err(InputError::ZeroBurst { line });
        }

        processes.push(Process::new(id, arrival, burst));
    }

    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples() {
        let procs = parse_processes("1 0 5\n2 1 3\n3 2 8\n").unwrap();
        assert_eq!(
            procs,
            vec![
                Process::new(1, 0, 5),
                Process::new(2, 1, 3),
                Process::new(3, 2, 8)
            ]
        );
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let procs = parse_processes("  1\t0   5  \n").unwrap();
        assert_eq!(procs, vec![Process::new(1, 0, 5)]);
    }

    #[test]
    fn wrong_field_count_rejects_whole_input() {
        let err = parse_processes("1 0 5\n2 1\n3 2 8\n").unwrap_err();
        assert!(matches!(err, InputError::FieldCount { line: 2, found: 2 }));
    }

    #[test]
    fn non_integer_field() {
        let err = parse_processes("1 zero 5\n").unwrap_err();
        assert!(matches!(err, InputError::BadInteger { line: 1, .. }));
    }

    #[test]
    fn duplicate_id() {
        let err = parse_processes("1 0 5\n1 2 3\n").unwrap_err();
        assert!(matches!(err, InputError::DuplicateId { line: 2, id: 1 }));
    }

    #[test]
    fn zero_burst() {
        let err = parse_processes("1 0 0\n").unwrap_err();
        assert!(matches!(err, InputError::ZeroBurst { line: 1 }));
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert_eq!(parse_processes("").unwrap(), vec![]);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "1 0 5\n2 1 3\n").unwrap();
        assert_eq!(load_processes(&path).unwrap().len(), 2);
    }
}
