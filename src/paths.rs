//! Graph view of a maze

use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use petgraph::visit::Bfs;
use petgraph::{Graph, Undirected};

use crate::{Grid, Point};

/// Open squares of a [Grid] and the steps between them
pub struct MazeGraph {
    /// Node indices, `[x][y]`; `None` for walls
    nodes: Vec<Vec<Option<NodeIndex>>>,
    /// Node weights are the square coordinates
    graph: Graph<Point, (), Undirected>,
}

impl MazeGraph {
    /// Build graph of all open squares
    ///
    /// Only steps right and down are added, because the graph is undirected.
    pub fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let mut graph = Graph::new_undirected();
        let mut nodes: Vec<Vec<Option<NodeIndex>>> = vec![vec![None; size]; size];

        for x in 0..size {
            for y in 0..size {
                let a = Point::new(x, y);
                if !Self::is_open(grid, a) {
                    continue;
                }
                let node_a = Self::get_or_create_node(a, &mut nodes, &mut graph);
                for b in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if Self::is_open(grid, b) {
                        let node_b = Self::get_or_create_node(b, &mut nodes, &mut graph);
                        graph.add_edge(node_a, node_b, ());
                    }
                }
            }
        }
        Self { nodes, graph }
    }

    fn is_open(grid: &Grid, point: Point) -> bool {
        grid.cell(point).is_some_and(|c| c.is_open())
    }

    fn get_or_create_node(
        point: Point,
        nodes: &mut [Vec<Option<NodeIndex>>],
        graph: &mut Graph<Point, (), Undirected>,
    ) -> NodeIndex {
        *nodes[point.x][point.y].get_or_insert_with(|| graph.add_node(point))
    }

    fn node(&self, point: Point) -> Option<NodeIndex> {
        *self.nodes.get(point.x)?.get(point.y)?
    }

    /// Number of open squares
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Shortest walk from `from` to `to`, both ends included
    ///
    /// `None` if either end is a wall or no walk exists.
    pub fn shortest_path(&self, from: Point, to: Point) -> Option<Vec<Point>> {
        let start = self.node(from)?;
        let goal = self.node(to)?;
        let (_, path) = astar(
            &self.graph,
            start,
            |n| n == goal,
            |_| 1,
            |n| self.graph[n].distance(to),
        )?;
        Some(path.into_iter().map(|n| self.graph[n]).collect())
    }

    /// Number of open squares reachable from `from`, itself included
    pub fn reachable_from(&self, from: Point) -> usize {
        let Some(start) = self.node(from) else {
            return 0;
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut count = 0;
        while bfs.next(&self.graph).is_some() {
            count += 1;
        }
        count
    }
}
