use std::collections::BTreeSet;

use crate::foundation::{
    core::{FrameIndex, FrameRange},
    error::{ReelError, ReelResult},
};

/// One item placed on the timeline.
#[derive(Clone, Debug)]
pub struct TimelineEntry<T> {
    /// Unique id of the entry.
    pub id: String,
    /// Global frames covered by the entry.
    pub range: FrameRange,
    /// The sequenced item.
    pub item: T,
}

/// Items laid back to back: `start(n) = start(n - 1) + duration(n - 1)`.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    entries: Vec<TimelineEntry<T>>,
    total: u64,
}

impl<T> Timeline<T> {
    /// Sequence `(id, duration, item)` triples by running accumulation.
    ///
    /// Zero-duration items are kept as empty ranges. Duplicate ids are rejected.
    pub fn compose<I>(items: I) -> ReelResult<Self>
    where
        I: IntoIterator<Item = (String, u64, T)>,
    {
        let mut seen = BTreeSet::new();
        let mut entries = Vec::new();
        let mut start = 0u64;
        for (id, duration, item) in items {
            if !seen.insert(id.clone()) {
                return Err(ReelError::validation(format!(
                    "duplicate timeline entry id '{id}'"
                )));
            }
            let end = start
                .checked_add(duration)
                .ok_or_else(|| ReelError::validation("timeline total duration overflows u64"))?;
            entries.push(TimelineEntry {
                id,
                range: FrameRange {
                    start: FrameIndex(start),
                    end: FrameIndex(end),
                },
                item,
            });
            start = end;
        }
        tracing::debug!(entries = entries.len(), total = start, "timeline composed");
        Ok(Self {
            entries,
            total: start,
        })
    }

    /// Sum of all durations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// All entries in order.
    pub fn entries(&self) -> &[TimelineEntry<T>] {
        &self.entries
    }

    /// Number of entries, empty ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is sequenced.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry containing `frame` and the frame local to it.
    ///
    /// `None` when `frame >= total`.
    pub fn locate(&self, frame: FrameIndex) -> Option<(usize, FrameIndex)> {
        if frame.0 >= self.total {
            return None;
        }
        // First entry ending after `frame`; empty entries can never be it.
        let idx = self.entries.partition_point(|e| e.range.end.0 <= frame.0);
        let entry = self.entries.get(idx)?;
        entry.range.local(frame).map(|local| (idx, local))
    }

    /// Entry containing `frame`.
    pub fn entry_at(&self, frame: FrameIndex) -> Option<&TimelineEntry<T>> {
        self.locate(frame).map(|(idx, _)| &self.entries[idx])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/composer.rs"]
mod tests;
