//! Exercise progression graph.
//!
//! Each exercise may name one easier and one harder variant. Together these
//! edges form a directed graph that the bodyweight scaler walks one step at a
//! time. The graph must stay free of self-loops and cycles; [`ProgressionGraph::validate`]
//! checks the whole catalog in one batch so the scaling path never has to.
//!
//! Mirroring (`a.harder == b` implies `b.easier == a`) is expected for primary
//! chains only. Several exercises may lead into the same harder movement while
//! that movement's single `easier` slot names just one of them.

use crate::{Catalog, Intensity, Progressions};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use strum::Display;

/// Which edge of the progression graph to follow
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Easier,
    Harder,
}

impl Direction {
    /// Substitution direction for a bodyweight exercise at `intensity`
    pub fn for_intensity(intensity: Intensity) -> Option<Self> {
        match intensity {
            Intensity::Low => Some(Direction::Easier),
            Intensity::Moderate => None,
            Intensity::High => Some(Direction::Harder),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Easier => Direction::Harder,
            Direction::Harder => Direction::Easier,
        }
    }
}

/// A structural problem in the progression edges
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub enum ProgressionIssue {
    #[error("'{slug}' lists itself as its {direction} progression")]
    SelfReference { slug: String, direction: Direction },

    #[error("'{slug}' has '{target}' as both easier and harder progression")]
    SameEasierAndHarder { slug: String, target: String },

    #[error("'{slug}' {direction} progression references unknown exercise '{target}'")]
    DanglingReference {
        slug: String,
        direction: Direction,
        target: String,
    },

    #[error("{direction} progressions form a cycle: {}", .path.join(" -> "))]
    Cycle {
        direction: Direction,
        path: Vec<String>,
    },
}

/// Adjacency view of the catalog's progression edges
#[derive(Clone, Debug, Default)]
pub struct ProgressionGraph {
    edges: BTreeMap<String, Progressions>,
}

impl ProgressionGraph {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_edges(
            catalog
                .exercises
                .values()
                .map(|e| (e.slug.clone(), e.progressions.clone())),
        )
    }

    pub fn from_edges(edges: impl IntoIterator<Item = (String, Progressions)>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.edges.contains_key(slug)
    }

    pub fn progressions(&self, slug: &str) -> Option<&Progressions> {
        self.edges.get(slug)
    }

    /// One step along `direction`
    pub fn next(&self, slug: &str, direction: Direction) -> Option<&str> {
        let progressions = self.edges.get(slug)?;
        match direction {
            Direction::Easier => progressions.easier.as_deref(),
            Direction::Harder => progressions.harder.as_deref(),
        }
    }

    /// Walk from `slug` until a terminal node, including both ends
    ///
    /// Fails with [`ProgressionIssue::Cycle`] if a slug would be revisited.
    pub fn chain(&self, slug: &str, direction: Direction) -> Result<Vec<String>, ProgressionIssue> {
        let mut path = vec![slug.to_string()];
        let mut visited: HashSet<&str> = HashSet::from([slug]);
        let mut current = slug;

        while let Some(next) = self.next(current, direction) {
            if !visited.insert(next) {
                let start = path.iter().position(|s| s == next).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(next.to_string());
                return Err(ProgressionIssue::Cycle {
                    direction,
                    path: cycle,
                });
            }
            path.push(next.to_string());
            current = next;
        }

        Ok(path)
    }

    /// Number of steps from `slug` to the end of its chain
    pub fn depth(&self, slug: &str, direction: Direction) -> Result<usize, ProgressionIssue> {
        self.chain(slug, direction).map(|path| path.len() - 1)
    }

    /// Easiest variant reachable from `slug`
    pub fn easiest(&self, slug: &str) -> Result<String, ProgressionIssue> {
        self.terminal(slug, Direction::Easier)
    }

    /// Hardest variant reachable from `slug`
    pub fn hardest(&self, slug: &str) -> Result<String, ProgressionIssue> {
        self.terminal(slug, Direction::Harder)
    }

    fn terminal(&self, slug: &str, direction: Direction) -> Result<String, ProgressionIssue> {
        let mut path = self.chain(slug, direction)?;
        Ok(path.pop().unwrap_or_else(|| slug.to_string()))
    }

    /// Whether the edge out of `slug` along `direction` is mirrored by the target
    pub fn is_mirrored(&self, slug: &str, direction: Direction) -> bool {
        self.next(slug, direction)
            .and_then(|target| self.next(target, direction.reverse()))
            == Some(slug)
    }

    /// Check every edge; returns all issues found, sorted and de-duplicated
    pub fn validate(&self) -> Vec<ProgressionIssue> {
        let mut issues = BTreeSet::new();

        for (slug, progressions) in &self.edges {
            for direction in [Direction::Easier, Direction::Harder] {
                let Some(target) = self.next(slug, direction) else {
                    continue;
                };
                if target == slug {
                    issues.insert(ProgressionIssue::SelfReference {
                        slug: slug.clone(),
                        direction,
                    });
                } else if !self.contains(target) {
                    issues.insert(ProgressionIssue::DanglingReference {
                        slug: slug.clone(),
                        direction,
                        target: target.to_string(),
                    });
                }
            }

            if let (Some(easier), Some(harder)) = (&progressions.easier, &progressions.harder) {
                if easier == harder {
                    issues.insert(ProgressionIssue::SameEasierAndHarder {
                        slug: slug.clone(),
                        target: easier.clone(),
                    });
                }
            }
        }

        for slug in self.edges.keys() {
            for direction in [Direction::Easier, Direction::Harder] {
                let walk = self.chain(slug, direction);
                if let Err(ProgressionIssue::Cycle { direction, path }) = walk {
                    // Self-loops are already reported above
                    if path.len() > 2 {
                        issues.insert(ProgressionIssue::Cycle {
                            direction,
                            path: canonical_cycle(path),
                        });
                    }
                }
            }
        }

        if !issues.is_empty() {
            tracing::warn!("Progression graph has {} issue(s)", issues.len());
        }
        issues.into_iter().collect()
    }
}

/// Rotate a closed cycle path so it starts (and ends) at its smallest slug
fn canonical_cycle(mut path: Vec<String>) -> Vec<String> {
    path.pop();
    let start = path
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    path.rotate_left(start);
    if let Some(first) = path.first().cloned() {
        path.push(first);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(easier: Option<&str>, harder: Option<&str>) -> Progressions {
        Progressions {
            easier: easier.map(str::to_string),
            harder: harder.map(str::to_string),
        }
    }

    fn squat_graph() -> ProgressionGraph {
        ProgressionGraph::from_edges([
            ("bodyweight_squat".to_string(), edge(None, Some("goblet_squat"))),
            (
                "goblet_squat".to_string(),
                edge(Some("bodyweight_squat"), Some("back_squat")),
            ),
            ("back_squat".to_string(), edge(Some("goblet_squat"), None)),
            ("box_squat".to_string(), edge(None, Some("goblet_squat"))),
        ])
    }

    #[test]
    fn test_chain_and_depth() {
        let graph = squat_graph();
        assert_eq!(
            graph.chain("bodyweight_squat", Direction::Harder).unwrap(),
            vec!["bodyweight_squat", "goblet_squat", "back_squat"]
        );
        assert_eq!(graph.depth("back_squat", Direction::Easier).unwrap(), 2);
        assert_eq!(graph.depth("back_squat", Direction::Harder).unwrap(), 0);
        assert_eq!(graph.easiest("back_squat").unwrap(), "bodyweight_squat");
        assert_eq!(graph.hardest("box_squat").unwrap(), "back_squat");
    }

    #[test]
    fn test_unmirrored_secondary_edge_is_valid() {
        let graph = squat_graph();
        assert!(graph.is_mirrored("goblet_squat", Direction::Harder));
        assert!(!graph.is_mirrored("box_squat", Direction::Harder));
        assert!(graph.validate().is_empty());
    }

    #[test]
    fn test_detects_self_reference() {
        let graph =
            ProgressionGraph::from_edges([("plank".to_string(), edge(Some("plank"), None))]);
        assert_eq!(
            graph.validate(),
            vec![ProgressionIssue::SelfReference {
                slug: "plank".into(),
                direction: Direction::Easier,
            }]
        );
    }

    #[test]
    fn test_detects_same_easier_and_harder() {
        let graph = ProgressionGraph::from_edges([
            ("a".to_string(), edge(Some("b"), Some("b"))),
            ("b".to_string(), edge(None, None)),
        ]);
        assert!(graph.validate().contains(&ProgressionIssue::SameEasierAndHarder {
            slug: "a".into(),
            target: "b".into(),
        }));
    }

    #[test]
    fn test_detects_dangling_reference() {
        let graph =
            ProgressionGraph::from_edges([("push_up".to_string(), edge(None, Some("planche")))]);
        let issues = graph.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].to_string().contains("unknown exercise 'planche'"));
        // Walking still terminates at the missing node
        assert_eq!(graph.depth("push_up", Direction::Harder).unwrap(), 1);
    }

    #[test]
    fn test_detects_cycle_once() {
        let graph = ProgressionGraph::from_edges([
            ("a".to_string(), edge(None, Some("b"))),
            ("b".to_string(), edge(None, Some("c"))),
            ("c".to_string(), edge(None, Some("a"))),
        ]);
        assert!(graph.chain("b", Direction::Harder).is_err());
        assert_eq!(
            graph.validate(),
            vec![ProgressionIssue::Cycle {
                direction: Direction::Harder,
                path: vec!["a".into(), "b".into(), "c".into(), "a".into()]
            }]
        );
    }

    #[test]
    fn test_direction_for_intensity() {
        assert_eq!(Direction::for_intensity(Intensity::Low), Some(Direction::Easier));
        assert_eq!(Direction::for_intensity(Intensity::Moderate), None);
        assert_eq!(Direction::for_intensity(Intensity::High), Some(Direction::Harder));
    }
}
