//! Arena-backed doubly linked sequence.
//!
//! Nodes live in a `Vec` of slots and refer to each other by slot index
//! ([`Handle`]). A handle stays valid for as long as its node is linked, so
//! splicing a node to another position never invalidates what the index holds.
//! Removed slots are threaded onto a free list and reused by later pushes.

/// Stable position of a node inside the arena.
pub(super) type Handle = usize;

#[derive(Clone)]
struct Node<T> {
    value: T,
    previous: Option<Handle>,
    next: Option<Handle>,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<Handle> },
}

/// Doubly linked sequence whose nodes are owned by a slot arena.
#[derive(Clone)]
pub(super) struct Sequence<T> {
    slots: Vec<Slot<T>>,
    free: Option<Handle>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl<T> Sequence<T> {
    pub(super) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    #[inline]
    pub(super) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(super) const fn head(&self) -> Option<Handle> {
        self.head
    }

    #[inline]
    pub(super) const fn tail(&self) -> Option<Handle> {
        self.tail
    }

    #[inline]
    pub(super) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(super) fn reserve(&mut self, additional: usize) {
        let vacant = self.slots.len() - self.len;
        self.slots.reserve(additional.saturating_sub(vacant));
    }

    /// Drops trailing vacant slots, then releases spare capacity.
    ///
    /// Slots in the middle of the arena stay where they are because live
    /// handles may point past them.
    pub(super) fn shrink_to_fit(&mut self) {
        let mut truncated = false;
        while matches!(self.slots.last(), Some(Slot::Vacant { .. })) {
            self.slots.pop();
            truncated = true;
        }
        if truncated {
            self.rebuild_free_list();
        }
        self.slots.shrink_to_fit();
    }

    pub(super) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    #[inline]
    pub(super) fn get(&self, handle: Handle) -> &T {
        &self.node(handle).value
    }

    #[inline]
    pub(super) fn next(&self, handle: Handle) -> Option<Handle> {
        self.node(handle).next
    }

    #[inline]
    pub(super) fn previous(&self, handle: Handle) -> Option<Handle> {
        self.node(handle).previous
    }

    pub(super) fn push_back(&mut self, value: T) -> Handle {
        let handle = self.allocate(value);
        self.link_back(handle);
        handle
    }

    pub(super) fn push_front(&mut self, value: T) -> Handle {
        let handle = self.allocate(value);
        self.link_front(handle);
        handle
    }

    pub(super) fn insert_after(&mut self, anchor: Handle, value: T) -> Handle {
        let handle = self.allocate(value);
        self.link_after(handle, anchor);
        handle
    }

    pub(super) fn insert_before(&mut self, anchor: Handle, value: T) -> Handle {
        let handle = self.allocate(value);
        self.link_before(handle, anchor);
        handle
    }

    /// Relinks `handle` directly after `anchor`.
    ///
    /// Returns `false` without touching any link when the node is the anchor
    /// itself or already sits right after it.
    pub(super) fn move_after(&mut self, handle: Handle, anchor: Handle) -> bool {
        if handle == anchor || self.next(anchor) == Some(handle) {
            return false;
        }
        self.unlink(handle);
        self.link_after(handle, anchor);
        true
    }

    /// Relinks `handle` directly before `anchor`.
    ///
    /// Returns `false` without touching any link when the node is the anchor
    /// itself or already sits right before it.
    pub(super) fn move_before(&mut self, handle: Handle, anchor: Handle) -> bool {
        if handle == anchor || self.previous(anchor) == Some(handle) {
            return false;
        }
        self.unlink(handle);
        self.link_before(handle, anchor);
        true
    }

    pub(super) fn move_to_front(&mut self, handle: Handle) -> bool {
        match self.head {
            Some(head) => self.move_before(handle, head),
            None => false,
        }
    }

    pub(super) fn move_to_back(&mut self, handle: Handle) -> bool {
        match self.tail {
            Some(tail) => self.move_after(handle, tail),
            None => false,
        }
    }

    /// Unlinks the node at `handle`, frees its slot and returns its value.
    pub(super) fn remove(&mut self, handle: Handle) -> T {
        self.unlink(handle);
        let slot = std::mem::replace(
            &mut self.slots[handle],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(handle);
        self.len -= 1;
        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("slot {handle} was vacant while linked"),
        }
    }

    pub(super) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.remove(head))
    }

    pub(super) fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.remove(tail))
    }

    fn allocate(&mut self, value: T) -> Handle {
        let node = Node {
            value,
            previous: None,
            next: None,
        };
        self.len += 1;
        match self.free {
            Some(handle) => {
                if let Slot::Vacant { next_free } = self.slots[handle] {
                    self.free = next_free;
                }
                self.slots[handle] = Slot::Occupied(node);
                handle
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn rebuild_free_list(&mut self) {
        self.free = None;
        for handle in (0..self.slots.len()).rev() {
            if let Slot::Vacant { next_free } = &mut self.slots[handle] {
                *next_free = self.free;
                self.free = Some(handle);
            }
        }
    }

    fn unlink(&mut self, handle: Handle) {
        let (previous, next) = {
            let node = self.node(handle);
            (node.previous, node.next)
        };
        match previous {
            Some(previous) => self.node_mut(previous).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).previous = previous,
            None => self.tail = previous,
        }
        let node = self.node_mut(handle);
        node.previous = None;
        node.next = None;
    }

    fn link_back(&mut self, handle: Handle) {
        let tail = self.tail;
        self.node_mut(handle).previous = tail;
        match tail {
            Some(tail) => self.node_mut(tail).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
    }

    fn link_front(&mut self, handle: Handle) {
        let head = self.head;
        self.node_mut(handle).next = head;
        match head {
            Some(head) => self.node_mut(head).previous = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
    }

    fn link_after(&mut self, handle: Handle, anchor: Handle) {
        let next = self.node(anchor).next;
        {
            let node = self.node_mut(handle);
            node.previous = Some(anchor);
            node.next = next;
        }
        self.node_mut(anchor).next = Some(handle);
        match next {
            Some(next) => self.node_mut(next).previous = Some(handle),
            None => self.tail = Some(handle),
        }
    }

    fn link_before(&mut self, handle: Handle, anchor: Handle) {
        let previous = self.node(anchor).previous;
        {
            let node = self.node_mut(handle);
            node.previous = previous;
            node.next = Some(anchor);
        }
        self.node_mut(anchor).previous = Some(handle);
        match previous {
            Some(previous) => self.node_mut(previous).next = Some(handle),
            None => self.head = Some(handle),
        }
    }

    #[inline]
    fn node(&self, handle: Handle) -> &Node<T> {
        match &self.slots[handle] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("handle {handle} addresses a vacant slot"),
        }
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node<T> {
        match &mut self.slots[handle] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("handle {handle} addresses a vacant slot"),
        }
    }
}
