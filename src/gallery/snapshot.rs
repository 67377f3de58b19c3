//! Immutable gallery snapshots and swap planning
//!
//! A [`Gallery`] is a value: every transition produces a new snapshot and the
//! controller replaces its copy wholesale. This keeps transitions pure and
//! lets tests compare whole lists with `==`.

use crate::models::FileRecord;

/// Ordered list of files as displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    files: Vec<FileRecord>,
}

/// A file whose display position changed and must be re-sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMove {
    pub id: String,
    pub order: usize,
}

/// Result of planning a swap: the new snapshot and the order updates it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPlan {
    pub gallery: Gallery,
    pub moves: Vec<OrderMove>,
}

impl Gallery {
    /// Build a snapshot from server records, sorted ascending by `order`
    ///
    /// The sort is stable, so records sharing an `order` keep listing order.
    #[must_use]
    pub fn from_records(mut files: Vec<FileRecord>) -> Self {
        files.sort_by_key(|file| file.order);
        Self { files }
    }

    #[must_use]
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.files.iter().position(|file| file.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.files.iter().find(|file| file.id == id)
    }

    /// Ids in display order
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.id.as_str()).collect()
    }

    /// Plan exchanging the positions of `source` and `target`
    ///
    /// Only the two elements trade places; every other file keeps its index.
    /// Afterwards each file's `order` is set to its index, and every file whose
    /// stored `order` differed is listed in `moves`.
    ///
    /// Returns `None` when the ids are equal or either id is unknown.
    #[must_use]
    pub fn plan_swap(&self, source: &str, target: &str) -> Option<SwapPlan> {
        if source.is_empty() || target.is_empty() || source == target {
            return None;
        }
        let from = self.position(source)?;
        let to = self.position(target)?;
        if from == to {
            return None;
        }

        let mut files = self.files.clone();
        files.swap(from, to);

        let mut moves = Vec::new();
        for (index, file) in files.iter_mut().enumerate() {
            if file.order != index {
                file.order = index;
                moves.push(OrderMove { id: file.id.clone(), order: index });
            }
        }

        Some(SwapPlan { gallery: Self { files }, moves })
    }

    /// Snapshot with the record of the same id replaced
    ///
    /// Unknown ids leave the snapshot unchanged.
    #[must_use]
    pub fn with_record(&self, record: FileRecord) -> Self {
        let files = self
            .files
            .iter()
            .map(|file| if file.id == record.id { record.clone() } else { file.clone() })
            .collect();
        Self { files }
    }

    /// Snapshot with one file's tags replaced
    #[must_use]
    pub fn with_tags(&self, id: &str, tags: &[String]) -> Self {
        let files = self
            .files
            .iter()
            .map(|file| {
                let mut file = file.clone();
                if file.id == id {
                    file.tags = tags.to_vec();
                }
                file
            })
            .collect();
        Self { files }
    }
}
