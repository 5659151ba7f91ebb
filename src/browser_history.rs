use std::fmt::Display;

use serde::Serialize;

use crate::stack::LinkedListStack;

/// Visited pages, most recent on top.
#[derive(Debug)]
pub struct BrowserHistoryStack<T> {
    stack: LinkedListStack<T>,
}

impl<T> BrowserHistoryStack<T> {
    pub fn new() -> BrowserHistoryStack<T> {
        BrowserHistoryStack {
            stack: LinkedListStack::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.stack.size()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.stack.push(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.stack.peek()
    }

    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.stack.contains(t)
    }

    pub fn contains_by<F>(&self, t: &T, compare: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        self.stack.contains_by(t, compare)
    }

    pub fn stack_string(&self) -> String
    where
        T: Serialize,
    {
        self.stack.stack_string()
    }

    pub fn print_stack(&self)
    where
        T: Serialize,
    {
        self.stack.print_stack()
    }
}

impl<T> Default for BrowserHistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Display for BrowserHistoryStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.stack, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_delegates() {
        let mut history = BrowserHistoryStack::new();
        assert!(history.is_empty());
        history.push("https://www.google.com".to_owned());
        history.push("https://www.github.com".to_owned());

        assert_eq!(history.size(), 2);
        assert_eq!(history.peek().map(String::as_str), Some("https://www.github.com"));
        assert!(history.contains_by(&"HTTPS://WWW.GOOGLE.COM".to_owned(), |stored, target| {
            stored.eq_ignore_ascii_case(target)
        }));
        assert_eq!(history.pop().as_deref(), Some("https://www.github.com"));
        assert_eq!(history.to_string(), "(1 elements): \"https://www.google.com\"");
    }
}
