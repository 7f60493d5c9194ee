use std::{iter::Copied, slice::Iter};

use super::*;

/// Adjacency-list neighborhood: links in insertion order, multi-edges and loops allowed
#[derive(Debug, Clone, Default)]
pub struct ArrNeighborhood(Vec<Link>);

impl Neighborhood for ArrNeighborhood {
    const KEEPS_LOOPS: bool = true;

    fn new(_n: NumNodes) -> Self {
        Self(Vec::new())
    }

    fn num_of_links(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type LinkIter<'a>
        = Copied<Iter<'a, Link>>
    where
        Self: 'a;

    fn links(&self) -> Self::LinkIter<'_> {
        self.0.iter().copied()
    }

    fn try_push_link(&mut self, link: Link) -> bool {
        self.0.push(link);
        true
    }
}

impl ArrNeighborhood {
    /// Returns a slice-reference of the links
    pub fn as_slice(&self) -> &[Link] {
        &self.0
    }
}

/// Adjacency-matrix row: at most one link per target, ascending target order, no loops
#[derive(Debug, Clone)]
pub struct MatrixNeighborhood {
    present: NodeBitSet,
    slots: Vec<(EdgeId, EdgeWeight)>,
}

impl Neighborhood for MatrixNeighborhood {
    const KEEPS_LOOPS: bool = false;

    fn new(n: NumNodes) -> Self {
        Self {
            present: NodeBitSet::new(n),
            slots: vec![(0, EdgeWeight::default()); n as usize],
        }
    }

    fn num_of_links(&self) -> NumNodes {
        self.present.cardinality()
    }

    type LinkIter<'a>
        = MatrixLinks<'a>
    where
        Self: 'a;

    fn links(&self) -> Self::LinkIter<'_> {
        MatrixLinks { row: self, next: 0 }
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.present.get_bit(v)
    }

    fn try_push_link(&mut self, link: Link) -> bool {
        if self.present.set_bit(link.to) {
            return false;
        }
        self.slots[link.to as usize] = (link.id, link.weight);
        true
    }
}

/// Scans a matrix row for set cells
#[derive(Debug, Clone)]
pub struct MatrixLinks<'a> {
    row: &'a MatrixNeighborhood,
    next: Node,
}

impl Iterator for MatrixLinks<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Self::Item> {
        while (self.next as usize) < self.row.slots.len() {
            let to = self.next;
            self.next += 1;

            if self.row.present.get_bit(to) {
                let (id, weight) = self.row.slots[to as usize];
                return Some(Link { to, id, weight });
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn link(to: Node, id: EdgeId) -> Link {
        Link {
            to,
            id,
            weight: EdgeWeight::One,
        }
    }

    #[test]
    fn arr_keeps_insertion_order_and_duplicates() {
        let mut nbs = ArrNeighborhood::new(5);
        assert!(nbs.try_push_link(link(3, 0)));
        assert!(nbs.try_push_link(link(1, 1)));
        assert!(nbs.try_push_link(link(3, 2)));

        assert_eq!(nbs.num_of_links(), 3);
        assert_eq!(nbs.links().map(|l| l.to).collect_vec(), vec![3, 1, 3]);
        assert!(nbs.has_neighbor(1));
        assert!(!nbs.has_neighbor(4));
    }

    #[test]
    fn matrix_collapses_and_sorts() {
        let mut nbs = MatrixNeighborhood::new(5);
        assert!(nbs.try_push_link(link(3, 0)));
        assert!(nbs.try_push_link(link(1, 1)));
        assert!(!nbs.try_push_link(link(3, 2)));

        assert_eq!(nbs.num_of_links(), 2);
        assert_eq!(
            nbs.links().map(|l| (l.to, l.id)).collect_vec(),
            vec![(1, 1), (3, 0)]
        );
        assert!(nbs.has_neighbor(3));
        assert!(!nbs.has_neighbor(0));
    }
}
