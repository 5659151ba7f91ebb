use std::fmt::{Debug, Display};

use log::{info, trace};
use serde::Serialize;

use crate::node_pool::{Entry, Node, NodePool};
use crate::render;

/// A singly linked list with a cached tail.
///
/// Both ends can be read and grown in O(1). Removing the head is O(1), but
/// removing the tail has to walk from the head to find its predecessor since
/// nodes only link forward.
pub struct SingleLinkedList<T> {
    nodes: NodePool<T>,
    size: usize,
    head: Option<Entry>,
    tail: Option<Entry>,
}

impl<T> SingleLinkedList<T> {
    pub fn new() -> SingleLinkedList<T> {
        SingleLinkedList {
            nodes: NodePool::new(),
            size: 0,
            head: None,
            tail: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn head(&self) -> Option<&T> {
        self.data_at(self.head?)
    }

    pub fn tail(&self) -> Option<&T> {
        self.data_at(self.tail?)
    }

    pub fn insert_at_head(&mut self, data: T) {
        let entry = self.nodes.alloc(Node::new(data, self.head));
        if self.tail.is_none() {
            self.tail = Some(entry);
        }
        self.head = Some(entry);
        self.size += 1;
    }

    pub fn append(&mut self, data: T) {
        let entry = self.nodes.alloc(Node::new(data, None));
        match self.tail.and_then(|tail| self.nodes.mut_node(tail)) {
            Some(tail) => tail.set_next(Some(entry)),
            None => self.head = Some(entry),
        }
        self.tail = Some(entry);
        self.size += 1;
    }

    pub fn pop_head(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.release(head)?;

        self.head = node.next();
        self.size -= 1;
        if self.size == 0 {
            self.tail = None;
        }
        Some(node.into_data())
    }

    pub fn pop_tail(&mut self) -> Option<T> {
        let tail = self.tail?;

        match self.node_before(tail) {
            Some(prev) => {
                if let Some(node) = self.nodes.mut_node(prev) {
                    node.set_next(None);
                }
                self.tail = Some(prev);
            }
            // the tail was also the head
            None => {
                self.head = None;
                self.tail = None;
            }
        }

        self.size -= 1;
        self.nodes.release(tail).map(Node::into_data)
    }

    /// Check whether `target` is stored in the list, by `==`.
    pub fn contain(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.contain_by(target, |data, target| data == target)
    }

    /// Check whether any stored value matches `target` under `compare`.
    ///
    /// `compare` always receives the stored value first and `target` second.
    pub fn contain_by<F>(&self, target: &T, compare: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        self.values().any(|data| compare(data, target))
    }

    /// Render the whole list, e.g. `(3 elements): 1 --> 2 --> 3`.
    pub fn list_string(&self) -> String
    where
        T: Serialize,
    {
        render::render_list(self.size, self.values())
    }

    pub fn print_list(&self)
    where
        T: Serialize,
    {
        info!("{}", self.list_string());
    }

    fn data_at(&self, entry: Entry) -> Option<&T> {
        self.nodes.node(entry).map(Node::data)
    }

    // O(n): there is no back link to follow
    fn node_before(&self, target: Entry) -> Option<Entry> {
        let mut current = self.head;
        let mut hops = 0;
        while let Some(entry) = current {
            let next = self.nodes.node(entry)?.next();
            if next == Some(target) {
                trace!("found node before tail after {} hops", hops);
                return Some(entry);
            }
            current = next;
            hops += 1;
        }
        None
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            nodes: &self.nodes,
            current: self.head,
        }
    }
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SingleLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T: Serialize> Display for SingleLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.list_string())
    }
}

// head to tail walk, only used for search and rendering
struct Values<'a, T> {
    nodes: &'a NodePool<T>,
    current: Option<Entry>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.node(self.current?)?;
        self.current = node.next();
        Some(node.data())
    }
}
