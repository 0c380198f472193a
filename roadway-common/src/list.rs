use std::sync::Arc;

use crate::subject::{clamp_range, Subject};

/// An ordered list subject backed by a shared slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T> {
    items: Arc<[T]>,
}

impl<T> List<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Subject for List<T> {
    type Element = T;
    type Frame = Vec<T>;

    fn length(&self) -> Option<usize> {
        Some(self.items.len())
    }

    fn element_at(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }

    fn extract(&self, start: usize, end: usize) -> Vec<T> {
        let (start, end) = clamp_range(start, end, self.items.len());
        self.items[start..end].to_vec()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for List<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
