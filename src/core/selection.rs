use super::artifacts::ArtifactKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// What the visitor is focused on: at most one selected artifact and, for
/// the peripheral label, at most one hovered one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<ArtifactKey>,
    hover: Option<ArtifactKey>,
}

impl Selection {
    pub fn with_current(current: Option<ArtifactKey>) -> Self {
        Self {
            current,
            hover: None,
        }
    }

    pub fn current(&self) -> Option<ArtifactKey> {
        self.current
    }

    pub fn hover(&self) -> Option<ArtifactKey> {
        self.hover
    }

    /// Replace the selection. Returns the previous value when it changed.
    pub fn set(&mut self, key: Option<ArtifactKey>) -> Option<Option<ArtifactKey>> {
        if self.current == key {
            return None;
        }
        let previous = std::mem::replace(&mut self.current, key);
        Some(previous)
    }

    /// Cyclic neighbour of the current selection; `None` when nothing is selected.
    pub fn neighbour(&self, direction: Direction) -> Option<ArtifactKey> {
        self.current.map(|k| match direction {
            Direction::Next => k.next(),
            Direction::Prev => k.prev(),
        })
    }

    pub fn set_hover(&mut self, key: Option<ArtifactKey>) -> bool {
        if self.hover == key {
            return false;
        }
        self.hover = key;
        true
    }
}
