//! Run-range planning.
//!
//! Computes which contiguous slice of the step list one migrate invocation
//! executes, and where the cursor lands once the whole slice completes.

use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};

/// The ordered sub-sequence of step indices selected for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRange {
    /// Indices into the step list, already in execution order: ascending
    /// for `Up`, descending for `Down`.
    pub indices: Vec<usize>,

    /// Cursor value after the whole range completes.
    pub new_pos: usize,
}

impl RunRange {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Compute the run-range for `direction` from `pos` over `titles`.
///
/// With no target, `Up` selects everything not yet applied and `Down`
/// selects everything applied, newest first. With a target, the range is
/// inclusive of the named step; a target already at or behind the cursor for
/// the requested direction yields an empty range, which the engine treats as
/// an idempotent no-op.
///
/// An unknown target is a configuration error reported before anything
/// runs, not a retryable failure.
pub fn plan(
    titles: &[&str],
    pos: usize,
    direction: Direction,
    target: Option<&str>,
) -> CoreResult<RunRange> {
    // A stale record saved against a longer step list must not push the
    // cursor past the end of the current list.
    let pos = pos.min(titles.len());

    let range = match (direction, target) {
        (Direction::Up, None) => RunRange {
            indices: (pos..titles.len()).collect(),
            new_pos: titles.len(),
        },
        (Direction::Down, None) => RunRange {
            indices: (0..pos).rev().collect(),
            new_pos: 0,
        },
        (Direction::Up, Some(name)) => {
            let i = index_of(titles, name)?;
            if i < pos {
                RunRange {
                    indices: Vec::new(),
                    new_pos: pos,
                }
            } else {
                RunRange {
                    indices: (pos..=i).collect(),
                    new_pos: i + 1,
                }
            }
        }
        (Direction::Down, Some(name)) => {
            let i = index_of(titles, name)?;
            // i == pos means the target has not been applied yet, so there
            // is nothing to roll back.
            if i >= pos {
                RunRange {
                    indices: Vec::new(),
                    new_pos: pos,
                }
            } else {
                RunRange {
                    indices: (i..pos).rev().collect(),
                    new_pos: i,
                }
            }
        }
    };

    Ok(range)
}

fn index_of(titles: &[&str], name: &str) -> CoreResult<usize> {
    titles
        .iter()
        .position(|t| *t == name)
        .ok_or_else(|| CoreError::UnknownStep {
            name: name.to_string(),
        })
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
