//! Column Layout
//!
//! Greedy largest-first packing of groups into a fixed number of columns,
//! used to balance the footer sitemap.

use crate::models::FooterGroup;

/// Anything with a display height measured in entries
pub trait Weighted {
    fn weight(&self) -> usize;
}

impl Weighted for FooterGroup {
    fn weight(&self) -> usize {
        self.links.len()
    }
}

/// One rendered column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a, G> {
    pub groups: Vec<&'a G>,
    /// Sum of the weights of `groups`
    pub total: usize,
}

/// Non-empty columns in column-index order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment<'a, G> {
    pub columns: Vec<Column<'a, G>>,
}

impl<'a, G> ColumnAssignment<'a, G> {
    pub fn totals(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.total).collect()
    }

    pub fn max_total(&self) -> usize {
        self.columns.iter().map(|c| c.total).max().unwrap_or(0)
    }
}

/// Distribute `groups` over `column_count` columns.
///
/// Groups are visited heaviest first (equal weights last-to-first) and each one
/// goes to the column with the smallest running total, lowest index on ties.
/// Columns that end up empty are left out. A column count of zero yields no
/// columns.
pub fn pack_columns<G: Weighted>(groups: &[G], column_count: usize) -> ColumnAssignment<'_, G> {
    if column_count == 0 {
        return ColumnAssignment { columns: Vec::new() };
    }

    // Ascending stable sort walked from the end: heaviest first, and equal
    // weights come out in reverse input order.
    let mut order: Vec<&G> = groups.iter().collect();
    order.sort_by_key(|g| g.weight());

    let mut columns: Vec<Column<'_, G>> = (0..column_count)
        .map(|_| Column {
            groups: Vec::new(),
            total: 0,
        })
        .collect();

    for group in order.into_iter().rev() {
        // min_by_key returns the first minimum, which is the lowest index
        let Some(target) = columns.iter_mut().min_by_key(|c| c.total) else {
            break;
        };
        target.total += group.weight();
        target.groups.push(group);
    }

    columns.retain(|c| !c.groups.is_empty());
    ColumnAssignment { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq, Eq)]
    struct Group {
        name: &'static str,
        size: usize,
    }

    impl Weighted for Group {
        fn weight(&self) -> usize {
            self.size
        }
    }

    fn groups(sizes: &[(&'static str, usize)]) -> Vec<Group> {
        sizes
            .iter()
            .map(|&(name, size)| Group { name, size })
            .collect()
    }

    fn names<'a>(column: &Column<'a, Group>) -> Vec<&'static str> {
        column.groups.iter().map(|g| g.name).collect()
    }

    /// In-order chunking into `n` runs of equal group count
    fn sequential_chunks(groups: &[Group], n: usize) -> usize {
        let per = groups.len().div_ceil(n);
        groups
            .chunks(per.max(1))
            .map(|chunk| chunk.iter().map(|g| g.size).sum::<usize>())
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_pack_trace_five_groups_three_columns() {
        let input = groups(&[("a", 5), ("b", 1), ("c", 1), ("d", 1), ("e", 4)]);
        let packed = pack_columns(&input, 3);

        // 5→c0, 4→c1, 1→c2, 1→c2 (2 < 4), 1→c2 (2 is still the minimum)
        assert_eq!(packed.totals(), vec![5, 4, 3]);
        assert_eq!(names(&packed.columns[0]), vec!["a"]);
        assert_eq!(names(&packed.columns[1]), vec!["e"]);
        assert_eq!(names(&packed.columns[2]), vec!["d", "c", "b"]);
    }

    #[test]
    fn test_equal_weights_visit_last_first() {
        let input = groups(&[("x", 2), ("y", 2), ("z", 2)]);
        let packed = pack_columns(&input, 2);
        assert_eq!(names(&packed.columns[0]), vec!["z", "x"]);
        assert_eq!(names(&packed.columns[1]), vec!["y"]);
    }

    #[test]
    fn test_empty_columns_are_dropped() {
        let input = groups(&[("a", 3), ("b", 2)]);
        let packed = pack_columns(&input, 6);
        assert_eq!(packed.columns.len(), 2);
        assert_eq!(packed.totals(), vec![3, 2]);
    }

    #[test]
    fn test_every_group_placed_exactly_once() {
        let input = groups(&[
            ("a", 1),
            ("b", 1),
            ("c", 4),
            ("d", 5),
            ("e", 7),
            ("f", 4),
            ("g", 5),
            ("h", 1),
            ("i", 3),
        ]);
        for n in 1..=10 {
            let packed = pack_columns(&input, n);
            let mut placed: Vec<&str> = packed
                .columns
                .iter()
                .flat_map(|c| c.groups.iter().map(|g| g.name))
                .collect();
            placed.sort();
            assert_eq!(placed, vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
            assert!(packed.columns.len() <= n);
            let total: usize = packed.totals().iter().sum();
            assert_eq!(total, 31);
        }
    }

    #[test]
    fn test_beats_sequential_chunking_on_skewed_input() {
        let mut sizes = vec![("huge", 20)];
        sizes.extend(std::iter::repeat(("one", 1)).take(12));
        let input = groups(&sizes);

        let packed = pack_columns(&input, 3);
        assert_eq!(packed.max_total(), 20);
        assert!(packed.max_total() <= sequential_chunks(&input, 3));
        assert_eq!(packed.totals(), vec![20, 6, 6]);
    }

    #[test]
    fn test_single_column_takes_everything() {
        let input = groups(&[("a", 2), ("b", 9)]);
        let packed = pack_columns(&input, 1);
        assert_eq!(packed.columns.len(), 1);
        assert_eq!(names(&packed.columns[0]), vec!["b", "a"]);
    }

    #[test]
    fn test_zero_columns_or_groups() {
        let input = groups(&[("a", 2)]);
        assert!(pack_columns(&input, 0).columns.is_empty());
        let none: Vec<Group> = Vec::new();
        assert!(pack_columns(&none, 4).columns.is_empty());
    }

    #[test]
    fn test_packing_is_deterministic() {
        let input = groups(&[("a", 2), ("b", 2), ("c", 2), ("d", 1)]);
        let first = pack_columns(&input, 2);
        let second = pack_columns(&input, 2);
        assert_eq!(first, second);
    }
}
