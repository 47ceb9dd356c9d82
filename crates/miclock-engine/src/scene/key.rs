use super::ZIndex;

/// Stable sort key for draw items.
///
/// Ordering is lexicographic over the fields: `z` ascending (back-to-front),
/// then `order` ascending so equal layers keep insertion order. The derived
/// `Ord` relies on that field order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_order() {
        let low = SortKey::new(ZIndex(0), 9);
        let high = SortKey::new(ZIndex(1), 0);
        assert!(low < high);
    }

    #[test]
    fn order_breaks_ties() {
        assert!(SortKey::new(ZIndex(3), 1) < SortKey::new(ZIndex(3), 2));
    }
}
