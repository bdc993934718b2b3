use crate::graph::Graph;

/// Enumerates every simple graph on nodes `0..n`, one per edge mask.
///
/// Bit `k` of the mask stands for the k-th pair `(i, j)`, `i < j`, in row order.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = Graph::new();
        for i in 0..self.n as u32 {
            graph.add_node(i).unwrap();
        }

        let mut check = 0;
        for i in 0..self.n as u32 {
            for j in (i + 1)..self.n as u32 {
                if self.mask & (1 << check) != 0 {
                    // weights vary so that spanning forests are not all ties
                    let weight = ((i * 7 + j * 3) % 5) as f64;
                    graph.add_edge(&i, &j, Some(weight)).unwrap();
                }
                check += 1;
            }
        }

        self.mask = self.mask.wrapping_add(1);
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_all_masks() {
        let enumerator = GraphEnumeratorState {
            n: 3,
            mask: 0,
            last_mask: 8,
        };
        let edge_counts: Vec<_> = enumerator.map(|g| g.edge_count()).collect();
        assert_eq!(edge_counts, vec![0, 1, 1, 2, 1, 2, 2, 3]);
    }
}
