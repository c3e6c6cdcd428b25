//! Human-readable rendering of routes and ladders.

use std::fmt::{self, Display};

/// A route through the weighted graph together with its total cost
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary<'a> {
    pub path: &'a [usize],
    pub total: f64,
}

impl Display for RouteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "No path found");
        }
        for vertex in self.path {
            write!(f, "{} ", vertex)?;
        }
        write!(f, "\nTotal cost is {}", self.total)
    }
}

/// A word ladder, or its absence
#[derive(Debug, Clone, PartialEq)]
pub struct LadderSummary<'a, S: AsRef<str>> {
    pub ladder: &'a [S],
}

impl<S: AsRef<str>> Display for LadderSummary<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ladder.is_empty() {
            return write!(f, "No word ladder found.");
        }
        write!(f, "Word ladder found: ")?;
        for word in self.ladder {
            write!(f, "{} ", word.as_ref())?;
        }
        Ok(())
    }
}

/// Renders a vertex path and its cost, e.g. `"0 1 2 3 \nTotal cost is 4"`
pub fn format_path(path: &[usize], total: f64) -> String {
    RouteSummary { path, total }.to_string()
}

/// Renders a ladder, e.g. `"Word ladder found: hit hot dot dog cog "`
pub fn format_ladder<S: AsRef<str>>(ladder: &[S]) -> String {
    LadderSummary { ladder }.to_string()
}
