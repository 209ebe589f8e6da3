use std::collections::VecDeque;

use crate::render::Backend;

use super::Shape;

/// Ordered registry of user-placed shapes.
///
/// Insertion order is draw order. Shapes are only ever appended or cleared
/// wholesale; there is no removal of individual entries.
///
/// Capacity policy:
/// - [`ShapeList::new`] is unbounded
/// - [`ShapeList::with_limit`] keeps the newest `limit` shapes, evicting the
///   oldest on overflow
#[derive(Debug, Default, Clone)]
pub struct ShapeList {
    shapes: VecDeque<Shape>,
    limit: Option<usize>,
}

impl ShapeList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding at most `limit` shapes (minimum 1).
    #[inline]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            shapes: VecDeque::with_capacity(limit.min(4096)),
            limit: Some(limit.max(1)),
        }
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Appends `shape` at the tail. O(1).
    pub fn add(&mut self, shape: Shape) {
        if let Some(limit) = self.limit {
            while self.shapes.len() >= limit {
                self.shapes.pop_front();
                log::debug!("shape list full ({limit}); evicted oldest shape");
            }
        }
        self.shapes.push_back(shape);
    }

    /// Appends every shape in order.
    pub fn extend<I: IntoIterator<Item = Shape>>(&mut self, shapes: I) {
        for s in shapes {
            self.add(s);
        }
    }

    /// Removes every shape. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates shapes in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Submits every shape to `backend` once, in insertion order.
    ///
    /// Returns the number of submissions.
    pub fn render_all(&self, backend: &mut dyn Backend) -> usize {
        for shape in &self.shapes {
            shape.render(backend);
        }
        self.shapes.len()
    }
}
