use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are stored in recording order, which IS the paint order: widgets
/// emit back-to-front (a spinner pushes its outermost ring first), and later
/// widgets composite over earlier ones.
///
/// `clear` keeps allocated capacity, so a warmed list records frames without
/// allocating.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Recorded commands, back-to-front.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
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

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Iterates commands in paint order (back-to-front).
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }
}
