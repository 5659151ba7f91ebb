use std::fmt::Display;

use serde::Serialize;

use crate::linked_list::SingleLinkedList;

/// LIFO stack whose top is the tail of a [`SingleLinkedList`].
///
/// `push` and `peek` are O(1), `pop` is O(n) because the list has to find the
/// node before its tail.
#[derive(Debug)]
pub struct LinkedListStack<T> {
    list: SingleLinkedList<T>,
}

impl<T> LinkedListStack<T> {
    pub fn new() -> LinkedListStack<T> {
        LinkedListStack {
            list: SingleLinkedList::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.list.size()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.list.append(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_tail()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.tail()
    }

    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contain(t)
    }

    pub fn contains_by<F>(&self, t: &T, compare: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        self.list.contain_by(t, compare)
    }

    pub fn stack_string(&self) -> String
    where
        T: Serialize,
    {
        self.list.list_string()
    }

    pub fn print_stack(&self)
    where
        T: Serialize,
    {
        self.list.print_list()
    }
}

impl<T> Default for LinkedListStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Display for LinkedListStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.list, f)
    }
}
