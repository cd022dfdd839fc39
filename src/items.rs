use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

/// One renderable list: an ordered run of non-blank input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGroup {
    pub items: Vec<String>,
}

/// Split input text into groups on blank lines.
///
/// A line is blank when it trims to empty; runs of blank lines produce no
/// empty groups. Leading whitespace inside an item is preserved.
pub fn parse_groups(text: &str) -> Vec<ListGroup> {
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                groups.push(ListGroup {
                    items: std::mem::take(&mut current),
                });
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        groups.push(ListGroup { items: current });
    }

    groups
}

/// Read and parse a list file.
pub fn load_file(path: &Path) -> Result<Vec<ListGroup>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read list file {}", path.display()))?;
    Ok(parse_groups(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_group() {
        let groups = parse_groups("alpha\nbeta\ngamma\n");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn blank_lines_split_groups() {
        let groups = parse_groups("a\nb\n\nc\n\n\nd\ne\n");
        let lens: Vec<usize> = groups.iter().map(|g| g.items.len()).collect();
        assert_eq!(lens, vec![2, 1, 2]);
        assert_eq!(groups[1].items, vec!["c"]);
    }

    #[test]
    fn whitespace_only_lines_count_as_blank() {
        let groups = parse_groups("a\n   \t\nb\n");
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn crlf_input_parses_like_lf() {
        let groups = parse_groups("a\r\nb\r\n\r\nc\r\n");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items, vec!["a", "b"]);
        assert_eq!(groups[1].items, vec!["c"]);
    }

    #[test]
    fn leading_indent_is_kept() {
        let groups = parse_groups("  indented\nplain\n");
        assert_eq!(groups[0].items[0], "  indented");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(parse_groups("").is_empty());
        assert!(parse_groups("\n\n\n").is_empty());
    }

    #[test]
    fn load_file_reads_groups() {
        use std::io::Write;

        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "one\ntwo\n\nthree").unwrap();
        tmp.flush().unwrap();

        let groups = load_file(tmp.path()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].items, vec!["three"]);
    }

    #[test]
    fn load_file_missing_path_errors() {
        assert!(load_file(Path::new("/nonexistent/huelist-items.txt")).is_err());
    }
}
