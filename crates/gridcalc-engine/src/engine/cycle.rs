//! Circular dependency detection for formula cells.
//!
//! A formula may reference a formula that references it back, directly
//! (A1 -> A1) or through other cells (A1 -> B1 -> C1 -> A1). Evaluating
//! such a formula would recurse forever, so before every evaluation we walk
//! the live references depth-first and fail as soon as a cell on the
//! current path is reached again.
//!
//! Cells are identified by address. The grid is borrowed immutably for the
//! whole walk, so each address names exactly one cell while it runs.

use std::collections::HashSet;

use super::formula::Formula;
use super::{Cell, CellRef, Grid};

/// Detect circular dependencies reachable from a formula.
/// Returns Some(cycle_path) if a cycle is found, None otherwise.
/// The path starts and ends with the cell that closes the cycle.
pub fn detect_cycle(formula: &Formula, grid: &Grid) -> Option<Vec<CellRef>> {
    let mut visiting = HashSet::new();
    let mut path = Vec::new();

    if !detect_cycle_dfs(formula, grid, &mut visiting, &mut path) {
        return None;
    }

    let closing = *path.last()?;
    let start = path.iter().position(|cell_ref| *cell_ref == closing)?;
    Some(path.split_off(start))
}

fn detect_cycle_dfs(
    formula: &Formula,
    grid: &Grid,
    visiting: &mut HashSet<CellRef>,
    path: &mut Vec<CellRef>,
) -> bool {
    for dep in formula.live_references(grid) {
        if visiting.contains(&dep) {
            path.push(dep);
            return true;
        }

        let Some(Cell::Formula(next)) = grid.get_cell(&dep) else {
            continue;
        };

        visiting.insert(dep);
        path.push(dep);

        if detect_cycle_dfs(next, grid, visiting, path) {
            return true;
        }

        path.pop();
        visiting.remove(&dep);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cycle() {
        let grid = Grid::from_lines(["=B1*C1, 0.8, 123"]).unwrap();
        assert_eq!(detect_cycle(&Formula::new("=A1+B1"), &grid), None);
    }

    #[test]
    fn test_self_reference() {
        let grid = Grid::from_lines(["=A1+1"]).unwrap();
        let path = detect_cycle(&Formula::new("=A1"), &grid).unwrap();
        assert_eq!(path, vec![CellRef::new(0, 0), CellRef::new(0, 0)]);
    }

    #[test]
    fn test_indirect_cycle_path() {
        let grid = Grid::from_lines(["=B1*C2, =A1+C2, 123", ",220,\"100\""]).unwrap();
        let path = detect_cycle(&Formula::new("=A1*2"), &grid).unwrap();
        assert_eq!(
            path,
            vec![CellRef::new(0, 0), CellRef::new(1, 0), CellRef::new(0, 0)]
        );
    }

    #[test]
    fn test_longer_cycle() {
        let grid = Grid::from_lines(["=B1, =C1, =D1, =A1"]).unwrap();
        let path = detect_cycle(&Formula::new("=C1"), &grid).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn test_shared_dependency_is_not_a_cycle() {
        // A1 and B1 both read C1; C1 is reached twice but never on one path.
        let grid = Grid::from_lines(["=C1+1, =C1*2, 5, =A1+B1"]).unwrap();
        assert_eq!(detect_cycle(&Formula::new("=D1"), &grid), None);
    }

    #[test]
    fn test_absent_reference_is_ignored() {
        let grid = Grid::from_lines(["=Z99"]).unwrap();
        assert_eq!(detect_cycle(&Formula::new("=A1"), &grid), None);
    }
}
