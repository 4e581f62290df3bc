//! The set of tracked children, keyed by id.
//!
//! This is the unit of persistence: the whole collection is loaded and saved
//! as one JSON array. Loading goes through `from_children`, so a stored file
//! with a repeated id keeps only the first child for it.

use chrono::TimeZone;
use log::warn;
use serde::{Deserialize, Serialize};
use shared::Child;

use crate::domain::day_bucket::DayBucket;
use crate::domain::log_reconciliation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Child>", into = "Vec<Child>")]
pub struct ChildCollection {
    children: Vec<Child>,
}

impl From<Vec<Child>> for ChildCollection {
    fn from(children: Vec<Child>) -> Self {
        Self::from_children(children)
    }
}

impl From<ChildCollection> for Vec<Child> {
    fn from(collection: ChildCollection) -> Self {
        collection.children
    }
}

impl ChildCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, keeping only the first child for each id
    pub fn from_children(children: Vec<Child>) -> Self {
        let mut collection = Self::new();
        for child in children {
            let id = child.id.clone();
            if !collection.add_child(child) {
                warn!("Dropping duplicate child id {}", id);
            }
        }
        collection
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, child_id: &str) -> Option<&Child> {
        self.children.iter().find(|child| child.id == child_id)
    }

    /// Add a child. Returns false, leaving the collection unchanged, if the id is taken.
    pub fn add_child(&mut self, child: Child) -> bool {
        if self.get(&child.id).is_some() {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Remove a child together with all of its logs
    pub fn remove_child(&mut self, child_id: &str) -> Option<Child> {
        let index = self.children.iter().position(|child| child.id == child_id)?;
        Some(self.children.remove(index))
    }

    /// Reconcile the number of logs on the local day containing `date`.
    ///
    /// An unknown `child_id` is a no-op; the return value tells whether the
    /// child was found.
    pub fn set_count_for_day<Tz: TimeZone>(
        &mut self,
        tz: &Tz,
        child_id: &str,
        date: i64,
        new_count: i64,
    ) -> bool {
        let Some(child) = self.children.iter_mut().find(|child| child.id == child_id) else {
            return false;
        };
        child.logs = log_reconciliation::set_count_for_day(tz, &child.logs, date, new_count);
        true
    }

    /// Number of logs a child has on the local day containing `date`
    pub fn day_count<Tz: TimeZone>(&self, tz: &Tz, child_id: &str, date: i64) -> Option<usize> {
        let child = self.get(child_id)?;
        let bucket = DayBucket::containing(tz, date)?;
        Some(bucket.count(&child.logs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use shared::{DiaperBrand, DiaperLog};

    fn child(id: &str, name: &str) -> Child {
        Child {
            id: id.to_string(),
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            diaper_brand: DiaperBrand::Pampers,
            logs: Vec::new(),
        }
    }

    fn march_10() -> i64 {
        DayBucket::for_date(&Utc, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
            .unwrap()
            .start
    }

    #[test]
    fn test_add_and_remove_child() {
        let mut collection = ChildCollection::new();
        assert!(collection.add_child(child("a", "Alice")));
        assert!(!collection.add_child(child("a", "Impostor")));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("a").unwrap().name, "Alice");

        let removed = collection.remove_child("a").unwrap();
        assert_eq!(removed.name, "Alice");
        assert!(collection.is_empty());
        assert!(collection.remove_child("a").is_none());
    }

    #[test]
    fn test_removing_child_drops_its_logs() {
        let mut collection = ChildCollection::from_children(vec![child("a", "Alice"), child("b", "Ben")]);
        collection.set_count_for_day(&Utc, "a", march_10(), 4);
        collection.remove_child("a");

        let total_logs: usize = collection.children().iter().map(|c| c.logs.len()).sum();
        assert_eq!(total_logs, 0);
    }

    #[test]
    fn test_from_children_drops_duplicates() {
        let collection = ChildCollection::from_children(vec![
            child("a", "First"),
            child("a", "Second"),
            child("b", "Ben"),
        ]);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get("a").unwrap().name, "First");
    }

    #[test]
    fn test_set_count_for_known_child() {
        let mut collection = ChildCollection::from_children(vec![child("a", "Alice"), child("b", "Ben")]);
        assert!(collection.set_count_for_day(&Utc, "a", march_10(), 3));

        assert_eq!(collection.day_count(&Utc, "a", march_10()), Some(3));
        assert_eq!(collection.day_count(&Utc, "b", march_10()), Some(0));
    }

    #[test]
    fn test_unknown_child_is_a_no_op() {
        let mut collection = ChildCollection::from_children(vec![child("a", "Alice")]);
        collection.set_count_for_day(&Utc, "a", march_10(), 2);
        let before = collection.clone();

        assert!(!collection.set_count_for_day(&Utc, "missing", march_10(), 7));
        assert_eq!(collection, before);
        assert_eq!(collection.day_count(&Utc, "missing", march_10()), None);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut with_log = child("a", "Alice");
        with_log.logs.push(DiaperLog {
            id: "l1".to_string(),
            timestamp: 42,
        });
        let collection = ChildCollection::from_children(vec![with_log]);

        let json = serde_json::to_value(&collection).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["logs"][0]["id"], "l1");

        let restored: ChildCollection = serde_json::from_value(json).unwrap();
        assert_eq!(restored, collection);
    }

    #[test]
    fn test_repeated_id_in_stored_json_keeps_first_child() {
        let json = serde_json::json!([
            { "id": "dup", "name": "First", "dateOfBirth": "2024-01-01", "diaperBrand": "Pampers", "logs": [] },
            { "id": "dup", "name": "Second", "dateOfBirth": "2024-02-01", "diaperBrand": "Huggies", "logs": [] }
        ]);

        let mut collection: ChildCollection = serde_json::from_value(json).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("dup").unwrap().name, "First");

        assert!(collection.set_count_for_day(&Utc, "dup", march_10(), 3));
        assert_eq!(collection.day_count(&Utc, "dup", march_10()), Some(3));

        collection.remove_child("dup");
        assert!(collection.is_empty());
        assert!(collection.get("dup").is_none());
    }
}
