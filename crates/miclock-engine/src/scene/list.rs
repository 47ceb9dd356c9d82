use crate::coords::Transform;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + effective canvas transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Transform from command space to surface space, already composed with
    /// every enclosing [`DrawList::push_transform`].
    pub transform: Transform,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Transforms
///
/// Use [`push_transform`] / [`pop_transform`] the way a canvas uses
/// `save()` + `rotate()` / `restore()`. Transforms compose with the parent,
/// so a rotation pushed inside a translation rotates the translated frame.
///
/// ```ignore
/// draw_list.push_transform(Transform::rotate_about(deg, center));
/// // ... push hand geometry ...
/// draw_list.pop_transform();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of effective transforms. The top is the current transform,
    /// already composed with all parents.
    transform_stack: Vec<Transform>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the transform stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.transform_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The transform new commands are recorded under.
    #[inline]
    pub fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    /// Depth of the transform stack (0 when balanced).
    #[inline]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current transform from the transform stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            transform: self.current_transform(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a transformed region. Commands pushed until [`pop_transform`]
    /// are recorded under `current · t`.
    ///
    /// Calls must be balanced with [`pop_transform`].
    #[inline]
    pub fn push_transform(&mut self, t: Transform) {
        let effective = self.current_transform().then(t);
        self.transform_stack.push(effective);
    }

    /// Ends the most recent region started by [`push_transform`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        self.transform_stack.pop();
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}
