use super::*;
use crate::chain::{Chain, LetterId};
use crate::group::CyclicProduct;

fn chain(gens: &str, tokens: &[&str]) -> Chain {
    let g = CyclicProduct::parse(gens).unwrap();
    Chain::new(g, &tokens.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
}

#[test]
fn central_degenerate_keys_are_absent() {
    let c = chain("a0b0", &["abAB"]);
    let idx = CentralEdgeIndex::new(&c);
    for i in 0..c.num_letters() {
        let i = LetterId(i);
        assert!(idx.lookup(i, c.next_letter(i)).is_none());
    }
}

#[test]
fn central_pairs_resolve_with_opposite_orientations() {
    let c = chain("a0b0", &["abAB"]);
    let idx = CentralEdgeIndex::new(&c);
    for i in 0..c.num_letters() {
        for j in 0..c.num_letters() {
            let (i, j) = (LetterId(i), LetterId(j));
            if j == c.next_letter(i) {
                continue;
            }
            let here = idx.lookup(i, j).expect("non-degenerate key resolves");
            let partner = idx
                .lookup(c.prev_letter(j), c.next_letter(i))
                .expect("partner key resolves");
            assert_eq!(here.index, partner.index);
            assert_ne!(here.orientation, partner.orientation);
        }
    }
}

#[test]
fn central_edges_are_stored_once() {
    // 4 letters, 16 ordered keys, 4 degenerate; the remaining 12 come
    // in dual pairs, so 6 stored edges.
    let c = chain("a0b0", &["abAB"]);
    let idx = CentralEdgeIndex::new(&c);
    assert_eq!(idx.len(), 6);
    for e in idx.edges() {
        let r = idx.lookup(e.first, e.last).unwrap();
        assert_eq!(r.orientation, Orientation::Forward);
    }
}

#[test]
fn interface_views_are_dual() {
    let c = chain("a2b3", &["ab", "AB"]);
    let idx = InterfaceEdgeIndex::new(&c);
    for e in 0..idx.len() {
        let edge = idx.edge(e);
        assert_eq!(idx.from_poly_side(edge.first, edge.last), Some(e));
        assert_eq!(idx.from_group_side(edge.last, edge.first), Some(e));
    }
}

#[test]
fn interface_edges_cover_same_group_pairs() {
    // a-occurrences: a, A (2 of them); b-occurrences: b, B.
    // 4 ordered pairs per group, 8 edges total.
    let c = chain("a0b0", &["abAB"]);
    let idx = InterfaceEdgeIndex::new(&c);
    assert_eq!(idx.len(), 8);
    // Cross-group keys are absent.
    assert!(idx.from_poly_side(LetterId(0), LetterId(1)).is_none());
    // Same letter twice is a valid edge.
    assert!(idx.from_poly_side(LetterId(0), LetterId(0)).is_some());
}

#[test]
fn beginning_with_lists_all_edges_from_a_letter() {
    let c = chain("a0b0", &["abAB"]);
    let idx = InterfaceEdgeIndex::new(&c);
    // Letter 0 is 'a'; its group has occurrences {0, 2}.
    let from_a = idx.beginning_with(LetterId(0));
    assert_eq!(from_a.len(), 2);
    for &e in from_a {
        assert_eq!(idx.edge(e).first, LetterId(0));
    }
}

#[test]
fn group_edges_split_by_sign() {
    let c = chain("a2b0", &["aabb"]);
    // After reduction: word is "bb" (the aa run strips), so the a-group
    // is empty and the b-group has two regular occurrences.
    let a_edges = GroupEdgeIndex::new(&c, 0);
    let b_edges = GroupEdgeIndex::new(&c, 1);
    assert!(a_edges.regular_edges().is_empty());
    assert!(a_edges.inverse_edges().is_empty());
    assert_eq!(b_edges.regular_edges().len(), 4);
    assert!(b_edges.inverse_edges().is_empty());
}

#[test]
fn group_edges_include_self_pairs() {
    let c = chain("a3b0", &["aba"]);
    let idx = GroupEdgeIndex::new(&c, 0);
    // Occurrences of 'a': letters 0 and 2; 4 ordered pairs.
    assert_eq!(idx.regular_edges().len(), 4);
    assert!(idx
        .regular_edges()
        .iter()
        .any(|e| e.first == e.last && e.first == LetterId(0)));
}
