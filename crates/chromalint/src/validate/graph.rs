use std::collections::VecDeque;

/// An undirected graph over the vertices `0..n`, linking colors that are too
/// similar to each other.
///
/// The graph stores adjacency lists. Edges are expected to be added at most
/// once per vertex pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimilarityGraph {
    adjacency: Vec<Vec<usize>>,
}

impl SimilarityGraph {
    /// Create a new graph with the given number of vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Get the number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Determine whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Link the two vertices.
    ///
    /// # Panics
    ///
    /// If either vertex is out of bounds.
    pub fn add_edge(&mut self, v1: usize, v2: usize) {
        self.adjacency[v1].push(v2);
        if v1 != v2 {
            self.adjacency[v2].push(v1);
        }
    }

    /// Get the number of edges incident to the vertex, or zero if the vertex
    /// is out of bounds.
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Find all connected components with at least two vertices.
    ///
    /// This method performs a breadth-first traversal from every unvisited
    /// vertex in ascending order. Each component is sorted, and components are
    /// ordered by their smallest vertex.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.adjacency.len()];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..self.adjacency.len() {
            if visited[start] {
                continue;
            }

            visited[start] = true;
            queue.push_back(start);
            let mut component = Vec::new();

            while let Some(vertex) = queue.pop_front() {
                component.push(vertex);
                for &neighbor in &self.adjacency[vertex] {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }

            if 2 <= component.len() {
                component.sort_unstable();
                components.push(component);
            }
        }

        components
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::SimilarityGraph;

    #[test]
    fn test_empty() {
        let graph = SimilarityGraph::new(0);
        assert!(graph.is_empty());
        assert!(graph.connected_components().is_empty());

        let graph = SimilarityGraph::new(5);
        assert_eq!(graph.len(), 5);
        assert!(graph.connected_components().is_empty());
    }

    #[test]
    fn test_components() {
        let mut graph = SimilarityGraph::new(8);
        graph.add_edge(6, 1);
        graph.add_edge(1, 3);
        graph.add_edge(4, 7);
        graph.add_edge(3, 6);

        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.degree(3), 2);
        assert_eq!(graph.degree(0), 0);
        assert_eq!(graph.degree(42), 0);
        assert_eq!(
            graph.connected_components(),
            vec![vec![1, 3, 6], vec![4, 7]]
        );
    }

    #[test]
    fn test_chain() {
        // Transitively similar colors end up in the same component.
        let mut graph = SimilarityGraph::new(4);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        assert_eq!(graph.connected_components(), vec![vec![0, 1, 2, 3]]);
    }
}
