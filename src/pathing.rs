use crate::errors::{MazeError, Result};
use crate::traversal::PredecessorMap;
use crate::units::VertexId;

/// Walk the predecessor chain back from `target` to `source`.
///
/// Returns the path in travel order, `source` first and `target` last. A target equal to the
/// source is the single vertex path. Fails with `UnreachableTarget` when the target was never
/// discovered, or when the chain stops (or loops) without arriving at `source`.
pub fn reconstruct(predecessors: &PredecessorMap,
                   source: VertexId,
                   target: VertexId)
                   -> Result<Vec<VertexId>> {
    let unreachable = MazeError::UnreachableTarget { origin: source, target };

    if target == source {
        return Ok(vec![source]);
    }
    if !predecessors.contains_key(&target) {
        return Err(unreachable);
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match predecessors.get(&current) {
            Some(&previous) => {
                // A chain can't be longer than the map without revisiting something.
                if path.len() > predecessors.len() {
                    return Err(unreachable);
                }
                path.push(previous);
                current = previous;
            }
            None => return Err(unreachable),
        }
    }

    path.reverse();
    Ok(path)
}
