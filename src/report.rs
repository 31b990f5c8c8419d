//! Result record: what a solved run reports and how it is persisted.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::board::Action;
use crate::solver::Solved;

/// One solved run plus the measurements taken around it, laid out one
/// `name: value` line per field.
#[derive(Debug)]
pub struct Report {
    pub path_to_goal: Vec<Action>,
    pub cost_of_path: usize,
    pub nodes_expanded: usize,
    pub search_depth: usize,
    pub max_search_depth: usize,
    pub running_time: Duration,
    pub max_ram_kb: Option<u64>,
}

impl Report {
    pub fn new(solved: Solved, running_time: Duration, max_ram_kb: Option<u64>) -> Self {
        Report {
            // The goal's depth and the path length coincide by
            // construction; both fields are reported anyway.
            search_depth: solved.cost,
            cost_of_path: solved.cost,
            path_to_goal: solved.path,
            nodes_expanded: solved.expanded,
            max_search_depth: solved.max_depth,
            running_time,
            max_ram_kb,
        }
    }

    /// Persist the record to `path`, overwriting whatever was there.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let mut file = File::create(path)?;
        write!(file, "{}", self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path_to_goal: [")?;
        for (i, action) in self.path_to_goal.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", action)?;
        }
        writeln!(f, "]")?;

        writeln!(f, "cost_of_path: {}", self.cost_of_path)?;
        writeln!(f, "nodes_expanded: {}", self.nodes_expanded)?;
        writeln!(f, "search_depth: {}", self.search_depth)?;
        writeln!(f, "max_search_depth: {}", self.max_search_depth)?;
        writeln!(f, "running_time: {:.8}", self.running_time.as_secs_f64())?;
        match self.max_ram_kb {
            Some(kb) => writeln!(f, "max_ram_usage: {}", kb),
            None => writeln!(f, "max_ram_usage: unavailable"),
        }
    }
}

/// Peak resident set size of this process in kilobytes, read from
/// `/proc/self/status` (the `VmHWM` line). `None` where the platform
/// does not expose it.
#[cfg(target_os = "linux")]
pub fn peak_ram_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmHWM:") {
            return rest.split_whitespace().next()?.parse().ok();
        }
    }
    None
}

#[cfg(not(target_os = "linux"))]
pub fn peak_ram_kb() -> Option<u64> {
    None
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Report {
        Report {
            path_to_goal: vec![Action::Up, Action::Left, Action::Left],
            cost_of_path: 3,
            nodes_expanded: 9,
            search_depth: 3,
            max_search_depth: 4,
            running_time: Duration::from_nanos(123_456),
            max_ram_kb: Some(3228),
        }
    }

    #[test]
    fn renders_the_record_layout() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "path_to_goal: ['Up', 'Left', 'Left']",
                "cost_of_path: 3",
                "nodes_expanded: 9",
                "search_depth: 3",
                "max_search_depth: 4",
                "running_time: 0.00012346",
                "max_ram_usage: 3228",
            ]
        );
    }

    #[test]
    fn empty_path_renders_as_empty_list() {
        let mut report = sample();
        report.path_to_goal = Vec::new();
        assert!(report.to_string().starts_with("path_to_goal: []\n"));
    }

    #[test]
    fn missing_ram_figure_is_marked() {
        let mut report = sample();
        report.max_ram_kb = None;
        assert!(report.to_string().ends_with("max_ram_usage: unavailable\n"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn peak_ram_reads_proc() {
        assert!(peak_ram_kb().unwrap() > 0);
    }
}
