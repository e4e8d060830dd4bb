use crate::models::snapshot::Snapshot;

/// The last two authoritative snapshots
///
/// Replaced wholesale on every push: the old current becomes previous and
/// nothing older is kept.
#[derive(Debug, Default)]
pub struct SnapshotHistory {
    current: Option<Snapshot>,
    previous: Option<Snapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        SnapshotHistory::default()
    }

    /// Rotate in a freshly received snapshot
    pub fn push(&mut self, snapshot: Snapshot) {
        self.previous = self.current.replace(snapshot);
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cell::Cell;

    #[test]
    fn keeps_exactly_two_snapshots() {
        let a = Snapshot::default().with_elixir(1, 0);
        let b = Snapshot::default().with_elixir(2, 0);
        let c = Snapshot::default().with_last_move(Cell::new(1, 1).unwrap(), Cell::new(2, 1).unwrap());

        let mut history = SnapshotHistory::new();
        assert!(history.current().is_none());

        history.push(a.clone());
        assert_eq!(history.current(), Some(&a));
        assert!(history.previous().is_none());

        history.push(b.clone());
        history.push(c.clone());
        assert_eq!(history.current(), Some(&c));
        assert_eq!(history.previous(), Some(&b));
    }
}
