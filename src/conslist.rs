use std::{fmt, sync::Arc};

/// A persistent singly linked list. Appending returns a new list that shares
/// every existing cell with the original, so sibling locations cost one cell each.
pub struct ConsList<T> {
    head: Option<Arc<Cell<T>>>,
}

struct Cell<T> {
    value: T,
    tail: Option<Arc<Cell<T>>>,
}

impl<T> ConsList<T> {
    pub fn new() -> Self {
        ConsList { head: None }
    }

    pub fn append(&self, value: T) -> Self {
        ConsList {
            head: Some(Arc::new(Cell {
                value,
                tail: self.head.clone(),
            })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate from the most recently appended item back to the first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ConsList<T> {
    fn clone(&self) -> Self {
        ConsList {
            head: self.head.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ConsList::new(), |list, value| list.append(value))
    }
}

// Unlink cells one at a time, otherwise dropping a deep location recurses once per cell.
impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(cell) = next {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => next = cell.tail.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Cell<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|cell| {
            self.next = cell.tail.as_deref();
            &cell.value
        })
    }
}
