//! Pane tree splitter.
//!
//! Turns a [`LayoutNode`] tree into concrete split calls against a
//! [`Surface`], starting from one already-existing pivot pane, and returns
//! the flat pane-to-command map for the whole subtree.
//!
//! # Ordering
//!
//! Split order is part of the contract, not an implementation detail:
//!
//! - entries below the pivot index are created first, ascending, each as a
//!   before-split of the pivot pane, so their final visual order matches the
//!   declared order;
//! - entries above the pivot are created after, **descending**, each as an
//!   after-split of the pivot pane. Each after-split lands immediately
//!   adjacent to the pivot, so working from the far end inward keeps the
//!   declared order;
//! - the pivot entry reuses the existing pane and issues no split.
//!
//! The recursion is pure apart from the surface calls: pivot id and node are
//! explicit parameters, the merged map is returned by value.

use crate::error::{Error, Result};
use crate::layout::node::{LayoutChild, LayoutNode};
use crate::layout::spec::{SizeEntry, SplitSpec};
use crate::store::PaneCommandMap;
use crate::tmux::{PaneId, Placement, Surface};

/// Split `pivot` according to `node`, recursively, and return the mapping
/// from every descendant pane to its (marker-carrying) command.
pub fn split_tree(
    surface: &dyn Surface,
    node: &LayoutNode,
    pivot: &PaneId,
) -> Result<PaneCommandMap> {
    let spec = &node.spec;
    // The node parser enforces this too; re-checked here because the
    // splitter is also callable with hand-built trees.
    if node.children.len() != spec.len() {
        return Err(Error::Config(format!(
            "layout arity mismatch: {} sizes vs {} children",
            spec.len(),
            node.children.len()
        )));
    }

    let mut panes: Vec<(usize, PaneId)> = Vec::with_capacity(spec.len());
    panes.push((spec.pivot, pivot.clone()));

    for i in 0..spec.pivot {
        let id = surface.split(pivot, spec.axis, cells_at(spec, i)?, Placement::Before)?;
        panes.push((i, id));
    }
    for i in ((spec.pivot + 1)..spec.len()).rev() {
        let id = surface.split(pivot, spec.axis, cells_at(spec, i)?, Placement::After)?;
        panes.push((i, id));
    }
    panes.sort_by_key(|(i, _)| *i);

    let mut map = PaneCommandMap::new();
    for ((_, id), child) in panes.into_iter().zip(&node.children) {
        match child {
            LayoutChild::Leaf(command) => {
                map.insert(id, command.clone());
            }
            LayoutChild::Split(inner) => {
                let sub = split_tree(surface, inner, &id)?;
                map.extend(sub);
            }
        }
    }
    Ok(map)
}

/// Size in cells for a non-pivot entry.
fn cells_at(spec: &SplitSpec, index: usize) -> Result<u32> {
    match spec.entries[index] {
        SizeEntry::Cells(n) => Ok(n),
        SizeEntry::Pivot => Err(Error::Config(
            "pivot entry has no size; split spec is inconsistent".into(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
