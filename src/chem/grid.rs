//! Periodic table layout helpers.

use crate::chem::category::Category;
use crate::chem::element::Element;

pub const GRID_ROWS: usize = 7;
pub const GRID_COLS: usize = 18;

/// Cell of `element` in the main 7x18 table, as `(row, column)` counted
/// from the top left. Elements of the two detached series have no cell,
/// except lanthanum and actinium which hold the group 3 slots.
pub fn grid_position(element: &Element) -> Option<(usize, usize)> {
    match element.atomic_number {
        57 => return Some((5, 2)),
        89 => return Some((6, 2)),
        _ => {}
    }
    let group = element.group?;
    Some((usize::from(element.period) - 1, usize::from(group) - 1))
}

/// The main table as atomic numbers, `None` marking empty cells.
pub fn main_grid() -> [[Option<u8>; GRID_COLS]; GRID_ROWS] {
    let mut grid = [[None; GRID_COLS]; GRID_ROWS];
    for element in Element::all() {
        if let Some((row, col)) = grid_position(element) {
            grid[row][col] = Some(element.atomic_number);
        }
    }
    grid
}

/// The lanthanide series row, in atomic-number order.
pub fn lanthanides() -> Vec<Element> {
    series(Category::Lanthanide)
}

/// The actinide series row, in atomic-number order.
pub fn actinides() -> Vec<Element> {
    series(Category::Actinide)
}

fn series(category: Category) -> Vec<Element> {
    Element::all()
        .iter()
        .filter(|element| element.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cells() {
        let grid = main_grid();
        assert_eq!(grid[0][0], Some(1));
        assert_eq!(grid[0][17], Some(2));
        assert_eq!(grid[6][17], Some(118));
        // Period 1 has nothing between hydrogen and helium.
        assert!(grid[0][1..17].iter().all(Option::is_none));
    }

    #[test]
    fn series_heads_sit_in_group_three() {
        let grid = main_grid();
        assert_eq!(grid[5][2], Some(57));
        assert_eq!(grid[6][2], Some(89));
    }

    #[test]
    fn detached_series_members_have_no_cell() {
        let cerium = Element::by_atomic_number(58).unwrap();
        assert_eq!(grid_position(&cerium), None);
        let thorium = Element::by_atomic_number(90).unwrap();
        assert_eq!(grid_position(&thorium), None);
    }

    #[test]
    fn grid_occupancy() {
        let grid = main_grid();
        let filled: usize = grid
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum();
        assert_eq!(filled, 90);
        // The bottom four rows are fully populated.
        for row in &grid[3..] {
            assert!(row.iter().all(Option::is_some));
        }
    }

    #[test]
    fn series_rows() {
        let lanthanides = lanthanides();
        assert_eq!(lanthanides.len(), 15);
        assert_eq!(lanthanides[0].atomic_number, 57);
        assert_eq!(lanthanides[14].atomic_number, 71);

        let actinides = actinides();
        assert_eq!(actinides.len(), 15);
        assert_eq!(actinides[0].symbol, "Ac");
        assert_eq!(actinides[14].symbol, "Lr");
    }
}
