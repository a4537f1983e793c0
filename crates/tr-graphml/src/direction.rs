//! Edge direction inferred from yEd arrow styles.

/// How an imported edge is materialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One edge each way.
    Both,
    /// A single edge from the `source` node to the `target` node.
    SourceToTarget,
    /// A single edge from the `target` node back to the `source` node.
    TargetToSource,
}

impl Direction {
    /// Decide direction from the `source` and `target` attributes of an `Arrows` element.
    ///
    /// An arrowhead of `none` at one end removes the direction pointing at that end;
    /// a missing attribute keeps it. No direction at all counts as both.
    pub fn from_arrows(source_attr: Option<&str>, target_attr: Option<&str>) -> Self {
        let source_to_target = target_attr != Some("none");
        let target_to_source = source_attr != Some("none");
        match (source_to_target, target_to_source) {
            (true, false) => Direction::SourceToTarget,
            (false, true) => Direction::TargetToSource,
            _ => Direction::Both,
        }
    }
}
