//! Random Hamiltonian cycle on an n×n grid graph.
//!
//! The grid starts tiled with one 4-cycle per 2×2 block. Each step picks a
//! cycle, finds one of its edges lying next to a parallel edge of another
//! cycle, swaps that pair for the two edges closing the unit square between
//! them and so merges the two cycles. After `(n/2)² - 1` steps a single
//! cycle visits every vertex.
//!
//! Edge ids: horizontal edge (i, j) is `i*(n-1) + j`, vertical edge (i, j)
//! is `n*(n-1) + i*n + j`.

use crate::error::{Error, Result};
use crate::grid::{Orientation, WallGrid};
use crate::log_debug;
use rand::Rng;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
struct Cycle {
    edges: BTreeSet<usize>,
}

impl Cycle {
    fn new() -> Self {
        Cycle {
            edges: BTreeSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn random_edge<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.edges.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.edges.len());
        self.edges.iter().nth(index).copied()
    }

    /// Following edge in id order, wrapping to the first.
    fn next_edge(&self, edge: usize) -> Option<usize> {
        self.edges
            .range(edge + 1..)
            .next()
            .or_else(|| self.edges.iter().next())
            .copied()
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    cycles: Vec<Option<Cycle>>,
    owner: Vec<Option<usize>>,
    live: usize,
}

impl Graph {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 || n % 2 != 0 {
            return Err(Error::InvalidSize(n));
        }

        let count = (n / 2) * (n / 2);
        let mut graph = Graph {
            n,
            cycles: (0..count).map(|_| Some(Cycle::new())).collect(),
            owner: vec![None; 2 * n * (n - 1)],
            live: count,
        };

        for i in 0..n {
            let mut cycle = i / 2 * (n / 2);
            for j in 0..n - 1 {
                if j % 2 == 0 {
                    graph.attach(graph.horizontal_id(i, j), cycle)?;
                } else {
                    cycle += 1;
                }
            }
        }

        let mut cycle = 0;
        for i in (0..n - 1).step_by(2) {
            for j in 0..n {
                graph.attach(graph.vertical_id(i, j), cycle)?;
                if j % 2 == 1 {
                    cycle += 1;
                }
            }
        }

        Ok(graph)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Cycles not yet merged into another one.
    pub fn live_cycles(&self) -> usize {
        self.live
    }

    /// Total number of edges currently in some cycle.
    pub fn edge_count(&self) -> usize {
        self.owner.iter().filter(|owner| owner.is_some()).count()
    }

    /// Merge one random cycle with a neighbour.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.live <= 1 {
            return Err(Error::Generate("only one cycle left".to_string()));
        }

        let mut c1 = rng.gen_range(0..self.cycles.len());
        while self.cycles[c1].is_none() {
            c1 = (c1 + 1) % self.cycles.len();
        }

        let cycle = self.cycle(c1)?;
        let mut c1_edge = cycle
            .random_edge(rng)
            .ok_or_else(|| Error::Generate(format!("cycle {} has no edges", c1)))?;

        let mut c2_edge = None;
        for _ in 0..cycle.len() {
            if let Some(edge) = self.parallel_neighbour(c1, c1_edge) {
                c2_edge = Some(edge);
                break;
            }
            c1_edge = cycle.next_edge(c1_edge).unwrap_or(c1_edge);
        }
        let c2_edge = c2_edge
            .ok_or_else(|| Error::Generate(format!("cycle {} has no neighbouring cycle", c1)))?;
        let c2 = self.owner[c2_edge]
            .ok_or_else(|| Error::Generate(format!("edge {} has no cycle", c2_edge)))?;

        let (new_edge_1, new_edge_2) = match self.coords(c1_edge) {
            (Orientation::Horizontal, c1_i, j) => {
                let (_, c2_i, _) = self.coords(c2_edge);
                let i = c1_i.min(c2_i);
                (self.vertical_id(i, j), self.vertical_id(i, j + 1))
            }
            (Orientation::Vertical, i, c1_j) => {
                let (_, _, c2_j) = self.coords(c2_edge);
                let j = c1_j.min(c2_j);
                (self.horizontal_id(i, j), self.horizontal_id(i + 1, j))
            }
        };
        if self.owner[new_edge_1].is_some() || self.owner[new_edge_2].is_some() {
            return Err(Error::Generate(format!(
                "edges {} and {} are already taken",
                new_edge_1, new_edge_2
            )));
        }

        self.detach(c1_edge, c1)?;
        self.detach(c2_edge, c2)?;

        // 小的併入大的
        let (small, large) = if self.cycle(c1)?.len() > self.cycle(c2)?.len() {
            (c2, c1)
        } else {
            (c1, c2)
        };
        let merged = self.cycles[small]
            .take()
            .ok_or_else(|| Error::Generate(format!("cycle {} vanished", small)))?;
        for edge in merged.edges {
            self.attach(edge, large)?;
        }
        self.attach(new_edge_1, large)?;
        self.attach(new_edge_2, large)?;

        self.live -= 1;
        log_debug!(
            "hamilton",
            "merged cycle {} into {}, {} left",
            small,
            large,
            self.live
        );
        Ok(())
    }

    /// Merge until a single cycle remains.
    pub fn optimize<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let steps = self.live.saturating_sub(1);
        for _ in 0..steps {
            self.step(rng)?;
        }
        Ok(())
    }

    /// Every edge that belongs to a cycle becomes a wall.
    pub fn to_grid(&self) -> WallGrid {
        let mut grid = WallGrid::empty(self.n);
        for (edge, owner) in self.owner.iter().enumerate() {
            if owner.is_none() {
                continue;
            }
            match self.coords(edge) {
                (Orientation::Horizontal, i, j) => grid.set_horizontal(i, j, true),
                (Orientation::Vertical, i, j) => grid.set_vertical(i, j, true),
            }
        }
        grid
    }

    fn cycle(&self, id: usize) -> Result<&Cycle> {
        self.cycles[id]
            .as_ref()
            .ok_or_else(|| Error::Generate(format!("cycle {} was merged away", id)))
    }

    fn attach(&mut self, edge: usize, id: usize) -> Result<()> {
        let cycle = self.cycles[id]
            .as_mut()
            .ok_or_else(|| Error::Generate(format!("cycle {} was merged away", id)))?;
        if !cycle.edges.insert(edge) {
            return Err(Error::Generate(format!(
                "edge {} already in cycle {}",
                edge, id
            )));
        }
        self.owner[edge] = Some(id);
        Ok(())
    }

    fn detach(&mut self, edge: usize, id: usize) -> Result<()> {
        let cycle = self.cycles[id]
            .as_mut()
            .ok_or_else(|| Error::Generate(format!("cycle {} was merged away", id)))?;
        if !cycle.edges.remove(&edge) {
            return Err(Error::Generate(format!("edge {} not in cycle {}", edge, id)));
        }
        self.owner[edge] = None;
        Ok(())
    }

    /// Parallel edge one step away that belongs to a different cycle.
    fn parallel_neighbour(&self, cycle: usize, edge: usize) -> Option<usize> {
        let n = self.n;
        let candidates: Vec<usize> = match self.coords(edge) {
            (Orientation::Horizontal, i, j) => [i.checked_sub(1), Some(i + 1).filter(|&b| b < n)]
                .into_iter()
                .flatten()
                .map(|i| self.horizontal_id(i, j))
                .collect(),
            (Orientation::Vertical, i, j) => [j.checked_sub(1), Some(j + 1).filter(|&r| r < n)]
                .into_iter()
                .flatten()
                .map(|j| self.vertical_id(i, j))
                .collect(),
        };

        candidates
            .into_iter()
            .find(|&other| matches!(self.owner[other], Some(owner) if owner != cycle))
    }

    fn coords(&self, edge: usize) -> (Orientation, usize, usize) {
        let n = self.n;
        let split = n * (n - 1);
        if edge < split {
            (Orientation::Horizontal, edge / (n - 1), edge % (n - 1))
        } else {
            let edge = edge - split;
            (Orientation::Vertical, edge / n, edge % n)
        }
    }

    fn horizontal_id(&self, i: usize, j: usize) -> usize {
        i * (self.n - 1) + j
    }

    fn vertical_id(&self, i: usize, j: usize) -> usize {
        self.n * (self.n - 1) + i * self.n + j
    }
}

/// Build and fully merge a graph of size `n`.
pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Result<WallGrid> {
    let mut graph = Graph::new(n)?;
    graph.optimize(rng)?;
    Ok(graph.to_grid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn degrees(grid: &WallGrid) -> HashMap<Point, usize> {
        let mut degrees = HashMap::new();
        for segment in grid.segments() {
            *degrees.entry(segment.start).or_insert(0) += 1;
            *degrees.entry(segment.end).or_insert(0) += 1;
        }
        degrees
    }

    #[test]
    fn test_rejects_odd_and_zero_sizes() {
        assert!(matches!(Graph::new(0), Err(Error::InvalidSize(0))));
        assert!(matches!(Graph::new(3), Err(Error::InvalidSize(3))));
    }

    #[test]
    fn test_initial_tiling() {
        let graph = Graph::new(4).unwrap();
        assert_eq!(graph.live_cycles(), 4);
        assert_eq!(graph.edge_count(), 16);

        // 每個 2x2 區塊一個正方形
        let grid = graph.to_grid();
        assert_eq!(grid.to_text(), "4\n101\n101\n101\n101\n1111\n0000\n1111\n");
    }

    #[test]
    fn test_two_by_two_is_already_done() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = generate(2, &mut rng).unwrap();
        assert_eq!(grid.to_text(), "2\n1\n1\n11\n");
    }

    #[test]
    fn test_step_merges_two_cycles() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut graph = Graph::new(6).unwrap();
        graph.step(&mut rng).unwrap();
        assert_eq!(graph.live_cycles(), 8);
        assert_eq!(graph.edge_count(), 36);
    }

    #[test]
    fn test_optimize_yields_hamiltonian_cycle() {
        for (n, seed) in [(4, 1), (6, 2), (8, 3), (10, 4)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut graph = Graph::new(n).unwrap();
            graph.optimize(&mut rng).unwrap();
            assert_eq!(graph.live_cycles(), 1);

            let grid = graph.to_grid();
            assert_eq!(grid.wall_count(), n * n);

            let degrees = degrees(&grid);
            assert_eq!(degrees.len(), n * n, "n = {}", n);
            assert!(degrees.values().all(|&d| d == 2), "n = {}", n);

            assert!(graph.step(&mut rng).is_err());
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = generate(8, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(8, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_grid_parses_back() {
        let grid = generate(6, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(WallGrid::parse(&grid.to_text()).unwrap(), grid);
    }
}
