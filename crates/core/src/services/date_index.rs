use std::collections::HashMap;

use tracing::warn;

use crate::models::date::{CalendarDate, Dated};

/// Constant-time lookup from calendar date to record.
///
/// Keys are unique. When two records share a date, the one later in
/// iteration order replaces the earlier one, so a date can only ever
/// resolve to a single record. Callers that need every event on a date
/// must group them before indexing.
#[derive(Debug, Clone)]
pub struct DateKeyIndex<T> {
    entries: HashMap<CalendarDate, T>,
    overwritten: usize,
}

impl<T: Dated> DateKeyIndex<T> {
    /// Index `records` by date. Empty input yields an empty index.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let records = records.into_iter();
        let mut entries = HashMap::with_capacity(records.size_hint().0);
        let mut overwritten = 0;

        for record in records {
            if entries.insert(record.date(), record).is_some() {
                overwritten += 1;
            }
        }

        if overwritten > 0 {
            warn!(
                overwritten,
                kept = entries.len(),
                "Duplicate dates while indexing; later records replaced earlier ones"
            );
        }

        Self { entries, overwritten }
    }
}

impl<T> DateKeyIndex<T> {
    pub fn get(&self, date: CalendarDate) -> Option<&T> {
        self.entries.get(&date)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many input records were replaced by a later record on the same date.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

impl<T> Default for DateKeyIndex<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            overwritten: 0,
        }
    }
}

impl<T: Dated> FromIterator<T> for DateKeyIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}
