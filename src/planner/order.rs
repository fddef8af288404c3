use crate::workflow::{GraphIndex, Node};
use ahash::AHashSet;
use std::collections::VecDeque;

/// Breadth-first visitation order of the nodes reachable from `start`.
///
/// A target may be queued several times; the emitted set on dequeue keeps each
/// node to a single appearance. Ids that resolve to no node are skipped.
pub(crate) fn breadth_first<'a>(index: &GraphIndex<'a>, start: &'a str) -> Vec<&'a Node> {
    let mut order = Vec::new();
    let mut emitted: AHashSet<&'a str> = AHashSet::new();
    let mut queue: VecDeque<&'a str> = VecDeque::from([start]);

    while let Some(id) = queue.pop_front() {
        if emitted.contains(id) {
            continue;
        }
        let Some(node) = index.node(id) else {
            continue;
        };
        order.push(node);
        emitted.insert(id);

        queue.extend(
            index
                .targets(id)
                .iter()
                .copied()
                .filter(|target| !emitted.contains(target)),
        );
    }

    order
}
