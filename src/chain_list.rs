//! ChainList: singly linked overflow list for one bucket.
//!
//! Nodes live in a per-list `SlotMap` and link to each other through
//! generational keys, so the list owns every node and payload outright and
//! dropping it never recurses down the chain.

use slotmap::{new_key_type, SlotMap};
use std::collections::TryReserveError;

new_key_type! {
    struct NodeKey;
}

#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<NodeKey>,
}

/// Singly linked list of owned payloads, newest node first.
#[derive(Debug)]
pub struct ChainList<T> {
    nodes: SlotMap<NodeKey, Node<T>>, // node storage; links are keys into it
    head: Option<NodeKey>,
}

impl<T> ChainList<T> {
    /// Build a one-node list owning `data`.
    pub fn new_node(data: T) -> Result<Self, TryReserveError> {
        let mut list = Self {
            nodes: SlotMap::with_key(),
            head: None,
        };
        list.prepend(data)?;
        Ok(list)
    }

    /// Prepend `data` to `head`, creating the list if there is none yet.
    /// On failure `head` is left exactly as it was.
    pub fn push_front(head: &mut Option<Self>, data: T) -> Result<(), TryReserveError> {
        match head {
            Some(list) => list.prepend(data),
            None => {
                *head = Some(Self::new_node(data)?);
                Ok(())
            }
        }
    }

    pub fn prepend(&mut self, data: T) -> Result<(), TryReserveError> {
        self.try_reserve(1)?;
        let k = self.nodes.insert(Node {
            data,
            next: self.head,
        });
        self.head = Some(k);
        Ok(())
    }

    /// Reserve room for `additional` more nodes without aborting on failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.nodes.try_reserve(additional)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&T> {
        self.head
            .and_then(|k| self.nodes.get(k))
            .map(|n| &n.data)
    }

    /// Walk the list head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
        }
    }

    pub fn find<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|d| pred(*d))
    }

    pub fn find_mut<F>(&mut self, mut pred: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cur = self.head;
        while let Some(k) = cur {
            let (hit, next) = {
                let node = self.nodes.get(k)?;
                (pred(&node.data), node.next)
            };
            if hit {
                return self.nodes.get_mut(k).map(|n| &mut n.data);
            }
            cur = next;
        }
        None
    }

    /// Unlink the first node whose payload satisfies `pred` and hand the
    /// payload back. The head moves to its successor when the head matches.
    pub fn remove_first<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev: Option<NodeKey> = None;
        let mut cur = self.head;
        while let Some(k) = cur {
            let (hit, next) = {
                let node = self.nodes.get(k)?;
                (pred(&node.data), node.next)
            };
            if hit {
                match prev {
                    None => self.head = next,
                    Some(p) => {
                        if let Some(prev_node) = self.nodes.get_mut(p) {
                            prev_node.next = next;
                        }
                    }
                }
                return self.nodes.remove(k).map(|n| n.data);
            }
            prev = Some(k);
            cur = next;
        }
        None
    }

    /// Destroy every node and payload.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }
}

/// Head-to-tail iterator over a `ChainList`.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    cur: Option<NodeKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cur?)?;
        self.cur = node.next;
        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a ChainList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
