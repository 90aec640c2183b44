//! The bookkeeping behind ear clipping. Three intrusive doubly-linked lists share one arena of
//! nodes, indexed the same way as the input points:
//!
//! - the boundary of the polygon that's still left, which is cyclic
//! - the reflex vertices, which can never be ears but can block other ears
//! - the ear candidates: convex vertices whose triangle doesn't contain any reflex vertex
//!
//! Every operation that changes membership is O(1).

use crate::validate::Winding;
use crate::{Error, Pt2D, Result, Triangle};

#[derive(Clone, Copy, Debug)]
struct Node {
    prev: usize,
    next: usize,

    prev_ear: Option<usize>,
    next_ear: Option<usize>,
    is_ear: bool,

    prev_reflex: Option<usize>,
    next_reflex: Option<usize>,
    is_reflex: bool,
}

pub struct ClassificationLists<'a> {
    pts: &'a [Pt2D],
    winding: Winding,
    nodes: Vec<Node>,

    boundary_head: usize,
    ear_head: Option<usize>,
    reflex_head: Option<usize>,
    // How many vertices are still on the boundary
    len: usize,
}

impl<'a> ClassificationLists<'a> {
    /// Builds the boundary in input order, then sorts every vertex into the reflex list or the
    /// ear list, then drops ear candidates that have a reflex vertex in the way. The points must
    /// already be validated; `winding` says which way they run.
    pub fn new(pts: &'a [Pt2D], winding: Winding) -> Result<ClassificationLists<'a>> {
        let n = pts.len();
        if n < 3 {
            return Err(Error::TooFewPoints(n));
        }

        let nodes = (0..n)
            .map(|idx| Node {
                prev: if idx == 0 { n - 1 } else { idx - 1 },
                next: (idx + 1) % n,
                prev_ear: None,
                next_ear: None,
                is_ear: false,
                prev_reflex: None,
                next_reflex: None,
                is_reflex: false,
            })
            .collect();
        let mut lists = ClassificationLists {
            pts,
            winding,
            nodes,
            boundary_head: 0,
            ear_head: None,
            reflex_head: None,
            len: n,
        };

        // Append to the tails while classifying, so both lists keep the input order
        let mut reflex_tail = None;
        let mut ear_tail = None;
        for idx in 0..n {
            if lists.is_reflex_vertex(idx) {
                lists.nodes[idx].is_reflex = true;
                lists.nodes[idx].prev_reflex = reflex_tail;
                match reflex_tail {
                    Some(tail) => lists.nodes[tail].next_reflex = Some(idx),
                    None => lists.reflex_head = Some(idx),
                }
                reflex_tail = Some(idx);
            } else {
                lists.nodes[idx].is_ear = true;
                lists.nodes[idx].prev_ear = ear_tail;
                match ear_tail {
                    Some(tail) => lists.nodes[tail].next_ear = Some(idx),
                    None => lists.ear_head = Some(idx),
                }
                ear_tail = Some(idx);
            }
        }

        // Only now is the full reflex list known
        let mut current = lists.ear_head;
        while let Some(idx) = current {
            current = lists.nodes[idx].next_ear;
            if !lists.is_clean_ear(idx) {
                lists.remove_ear(idx);
            }
        }

        Ok(lists)
    }

    /// How many vertices are still on the boundary.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn winding(&self) -> Winding {
        self.winding
    }

    pub fn boundary_head(&self) -> usize {
        self.boundary_head
    }

    pub fn ear_head(&self) -> Option<usize> {
        self.ear_head
    }

    pub fn prev(&self, idx: usize) -> usize {
        self.nodes[idx].prev
    }

    pub fn next(&self, idx: usize) -> usize {
        self.nodes[idx].next
    }

    pub fn is_ear(&self, idx: usize) -> bool {
        self.nodes[idx].is_ear
    }

    pub fn is_reflex(&self, idx: usize) -> bool {
        self.nodes[idx].is_reflex
    }

    /// The remaining boundary, starting from the head.
    pub fn boundary(&self) -> impl Iterator<Item = usize> + '_ {
        let head = self.boundary_head;
        let mut current = Some(head);
        std::iter::from_fn(move || {
            let idx = current?;
            let next = self.nodes[idx].next;
            current = if next == head { None } else { Some(next) };
            Some(idx)
        })
        .take(self.len)
    }

    pub fn ears(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.ear_head, move |idx| self.nodes[*idx].next_ear)
    }

    pub fn reflex_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.reflex_head, move |idx| self.nodes[*idx].next_reflex)
    }

    /// The triangle formed by a vertex and its current neighbors, in boundary order.
    pub fn triangle(&self, idx: usize) -> Triangle {
        let node = &self.nodes[idx];
        Triangle::new(self.pts[node.prev], self.pts[idx], self.pts[node.next])
    }

    /// Is the interior angle at this vertex, given its current neighbors, more than 180 degrees?
    /// Straight angles aren't reflex.
    pub fn is_reflex_vertex(&self, idx: usize) -> bool {
        let node = &self.nodes[idx];
        let pt = self.pts[idx];
        let v0 = self.pts[node.prev] - pt;
        let v1 = self.pts[node.next] - pt;
        let cross = v0.cross(v1);
        match self.winding {
            Winding::Clockwise => cross < 0.0,
            Winding::CounterClockwise => cross > 0.0,
        }
    }

    /// No reflex vertex is inside or on the edge of this vertex's triangle. Doesn't check that
    /// the vertex itself is convex.
    pub fn is_clean_ear(&self, idx: usize) -> bool {
        let node = &self.nodes[idx];
        let triangle = self.triangle(idx);
        !self.reflex_vertices().any(|reflex| {
            reflex != node.prev
                && reflex != node.next
                && reflex != idx
                && triangle.contains(self.pts[reflex])
        })
    }

    /// Pushes a vertex onto the front of the ear list. Does nothing if it's already there.
    pub fn add_ear(&mut self, idx: usize) {
        if self.nodes[idx].is_ear {
            return;
        }
        let old_head = self.ear_head;
        self.ear_head = Some(idx);
        let node = &mut self.nodes[idx];
        node.prev_ear = None;
        node.next_ear = old_head;
        node.is_ear = true;
        if let Some(old_head) = old_head {
            self.nodes[old_head].prev_ear = Some(idx);
        }
    }

    /// Unlinks a vertex from the ear list. Does nothing if it isn't there.
    pub fn remove_ear(&mut self, idx: usize) {
        if !self.nodes[idx].is_ear {
            return;
        }
        let Node {
            prev_ear, next_ear, ..
        } = self.nodes[idx];
        match prev_ear {
            Some(prev) => self.nodes[prev].next_ear = next_ear,
            None => self.ear_head = next_ear,
        }
        if let Some(next) = next_ear {
            self.nodes[next].prev_ear = prev_ear;
        }
        let node = &mut self.nodes[idx];
        node.prev_ear = None;
        node.next_ear = None;
        node.is_ear = false;
    }

    /// Pushes a vertex onto the front of the reflex list. Does nothing if it's already there.
    pub fn add_reflex(&mut self, idx: usize) {
        if self.nodes[idx].is_reflex {
            return;
        }
        let old_head = self.reflex_head;
        self.reflex_head = Some(idx);
        let node = &mut self.nodes[idx];
        node.prev_reflex = None;
        node.next_reflex = old_head;
        node.is_reflex = true;
        if let Some(old_head) = old_head {
            self.nodes[old_head].prev_reflex = Some(idx);
        }
    }

    /// Unlinks a vertex from the reflex list. Does nothing if it isn't there.
    pub fn remove_reflex(&mut self, idx: usize) {
        if !self.nodes[idx].is_reflex {
            return;
        }
        let Node {
            prev_reflex,
            next_reflex,
            ..
        } = self.nodes[idx];
        match prev_reflex {
            Some(prev) => self.nodes[prev].next_reflex = next_reflex,
            None => self.reflex_head = next_reflex,
        }
        if let Some(next) = next_reflex {
            self.nodes[next].prev_reflex = prev_reflex;
        }
        let node = &mut self.nodes[idx];
        node.prev_reflex = None;
        node.next_reflex = None;
        node.is_reflex = false;
    }

    /// Splices a vertex out of the boundary, joining its two neighbors. The vertex must already
    /// be off the ear list.
    pub fn remove_from_boundary(&mut self, idx: usize) {
        debug_assert!(!self.nodes[idx].is_ear);
        debug_assert!(self.len > 3);
        let Node { prev, next, .. } = self.nodes[idx];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        if self.boundary_head == idx {
            self.boundary_head = next;
        }
        // Whatever this vertex was, it no longer blocks anything
        self.remove_reflex(idx);
        self.len -= 1;
    }

    /// After a vertex's neighbors change, recompute which lists it belongs to. Reflex membership
    /// is settled first, so the ear test sees the current reflex set.
    pub fn reclassify(&mut self, idx: usize) {
        let reflex = self.is_reflex_vertex(idx);
        if reflex {
            self.add_reflex(idx);
            self.remove_ear(idx);
            return;
        }
        self.remove_reflex(idx);

        if self.is_clean_ear(idx) {
            self.add_ear(idx);
        } else {
            self.remove_ear(idx);
        }
    }
}
