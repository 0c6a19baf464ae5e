//! Behaviour shared by every logged entry kind (meal, workout, progress).

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user-owned, timestamped record.
pub trait Entry {
    fn id(&self) -> Uuid;
    fn user_id(&self) -> Uuid;
    fn date(&self) -> DateTime<Utc>;

    /// Ordering key for "latest" selection: timestamp first, id breaks ties.
    fn recency_key(&self) -> (DateTime<Utc>, Uuid) {
        (self.date(), self.id())
    }

    fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id() == user_id
    }
}

/// Pick the most recent entry, breaking timestamp ties by highest id.
pub fn latest<'a, E: Entry>(entries: impl IntoIterator<Item = &'a E>) -> Option<&'a E>
where
    E: 'a,
{
    entries.into_iter().max_by_key(|e| e.recency_key())
}
