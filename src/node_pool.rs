// index to node slot in pool vector
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Entry(pub usize);

#[derive(Debug)]
pub struct Node<T> {
    data: T,
    next: Option<Entry>,
}

impl<T> Node<T> {
    pub fn new(data: T, next: Option<Entry>) -> Self {
        Self { data, next }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn next(&self) -> Option<Entry> {
        self.next
    }

    pub fn set_next(&mut self, next: Option<Entry>) {
        self.next = next;
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Owns every node of a list. Released slots are recycled by later allocations.
#[derive(Debug)]
pub struct NodePool<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<Entry>,
}

impl<T> NodePool<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn alloc(&mut self, node: Node<T>) -> Entry {
        match self.free.pop() {
            Some(entry) => {
                self.slots[entry.0] = Some(node);
                entry
            }
            None => {
                self.slots.push(Some(node));
                Entry(self.slots.len() - 1)
            }
        }
    }

    /// Unlink the node from the pool and hand it back by value.
    pub fn release(&mut self, entry: Entry) -> Option<Node<T>> {
        let node = self.slots.get_mut(entry.0)?.take()?;
        self.free.push(entry);
        Some(node)
    }

    pub fn node(&self, entry: Entry) -> Option<&Node<T>> {
        self.slots.get(entry.0)?.as_ref()
    }

    pub fn mut_node(&mut self, entry: Entry) -> Option<&mut Node<T>> {
        self.slots.get_mut(entry.0)?.as_mut()
    }

    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<T> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}
