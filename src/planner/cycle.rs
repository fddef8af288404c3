use crate::workflow::GraphIndex;
use ahash::AHashSet;

/// Walks depth-first from `start` and returns the first cycle found on the active path.
///
/// The returned path starts and ends with the revisited node, e.g. `[A, B, A]`.
/// Only the current path counts: a node reached again through a sibling
/// branch is a shared descendant, not a cycle. Fully explored nodes are never
/// walked twice, which keeps the search linear in the size of the graph.
pub(crate) fn find_cycle<'a>(index: &GraphIndex<'a>, start: &'a str) -> Option<Vec<&'a str>> {
    let mut path: Vec<&'a str> = vec![start];
    let mut cursors: Vec<usize> = vec![0];
    let mut on_path: AHashSet<&'a str> = AHashSet::from_iter([start]);
    let mut finished: AHashSet<&'a str> = AHashSet::new();

    while let Some(&current) = path.last() {
        let targets = index.targets(current);
        let Some(cursor) = cursors.last_mut() else {
            break;
        };

        if let Some(&next) = targets.get(*cursor) {
            *cursor += 1;
            if on_path.contains(next) {
                let from = path.iter().position(|id| *id == next).unwrap_or(0);
                let mut cycle = path[from..].to_vec();
                cycle.push(next);
                return Some(cycle);
            }
            if finished.contains(next) {
                continue;
            }
            path.push(next);
            cursors.push(0);
            on_path.insert(next);
        } else {
            path.pop();
            cursors.pop();
            on_path.remove(current);
            finished.insert(current);
        }
    }

    None
}
