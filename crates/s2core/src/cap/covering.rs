use super::S2Cap;
use crate::coords::Face;
use crate::id::CellId;
use crate::metrics::K_MAX_EDGE;

impl<T> S2Cap<T> {
    /// Coarse covering: cells that overlap the cap, no finer than the level
    /// whose maximum edge length is closest to the cap radius.
    ///
    /// Depth-first over the six faces. A cell is emitted when all four
    /// vertices are inside, or when some are and the depth limit is reached.
    /// A cell with no vertex inside is only refined when it holds the center,
    /// so thin overlaps along an edge can be missed.
    pub fn get_intersecting_cells(&self) -> Vec<CellId> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut stack: Vec<CellId> = Face::ALL.iter().map(|&f| CellId::from_face(f)).collect();
        if self.is_full() {
            return stack;
        }

        let max_depth = K_MAX_EDGE.get_closest_level(self.radius());
        tracing::debug!(max_depth, radius = self.radius(), "cap covering");

        let mut out = Vec::new();
        let mut visited = 0usize;
        while let Some(cell) = stack.pop() {
            visited += 1;
            let count = self.contains_s2_cell_vertex_count(cell);
            let at_max = cell.level() >= max_depth;
            if count == 4 || (count > 0 && at_max) {
                tracing::trace!(cell = cell.0, level = cell.level(), count, "emit");
                out.push(cell);
            } else if count == 0 && !at_max {
                // A cell larger than the cap can hold it without any vertex inside.
                if cell.contains_s2_point(&self.center) {
                    stack.extend(cell.children());
                }
            } else if !at_max {
                stack.extend(cell.children());
            }
        }
        tracing::debug!(cells = out.len(), visited, "cap covering done");
        out
    }
}
