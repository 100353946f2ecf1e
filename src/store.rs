//! In-memory record store.
//!
//! Holds the employees, master rates, budget rows, overtime and
//! special-assistance items, and holidays edited through the API. Each
//! record kind lives in its own [`Table`]; the [`Record`] trait ties a
//! model to its table so the CRUD paths are written once.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Datelike;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BudgetItem, Employee, Holiday, OvertimeItem, RateCard, RateTable, SpecialAssistItem,
};

/// A model stored in the [`Store`].
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name used in errors and logs.
    const ENTITY: &'static str;

    /// The record's identifier.
    fn id(&self) -> &str;

    /// Replaces the record's identifier.
    fn set_id(&mut self, id: String);

    /// The table holding this kind of record.
    fn table(store: &Store) -> &RwLock<Table<Self>>;

    /// Checks the record before it is written.
    fn validate(&self) -> EngineResult<()> {
        Ok(())
    }

    /// The Buddhist year the record belongs to, for `?year=` filtering.
    fn year(&self) -> Option<i32> {
        None
    }

    /// Listing order. Records with equal keys list in insertion order.
    fn sort_key(&self) -> i64 {
        0
    }
}

#[derive(Debug)]
struct Row<T> {
    seq: u64,
    record: T,
}

/// Records of one kind, keyed by id.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<String, Row<T>>,
    next_seq: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T: Record> Table<T> {
    /// Every record, in listing order.
    pub fn list(&self) -> Vec<T> {
        let mut rows: Vec<&Row<T>> = self.rows.values().collect();
        rows.sort_by_key(|row| (row.record.sort_key(), row.seq));
        rows.into_iter().map(|row| row.record.clone()).collect()
    }

    /// The record with `id`.
    pub fn get(&self, id: &str) -> EngineResult<T> {
        self.rows
            .get(id)
            .map(|row| row.record.clone())
            .ok_or_else(|| EngineError::not_found(T::ENTITY, id))
    }

    /// Adds a record, assigning a new id if it has none.
    pub fn insert(&mut self, mut record: T) -> EngineResult<T> {
        record.validate()?;
        if record.id().trim().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }
        if self.rows.contains_key(record.id()) {
            return Err(EngineError::DuplicateRecord {
                entity: T::ENTITY.to_string(),
                id: record.id().to_string(),
            });
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(
            record.id().to_string(),
            Row {
                seq,
                record: record.clone(),
            },
        );
        Ok(record)
    }

    /// Replaces the record with `id`; the stored record keeps `id`.
    pub fn update(&mut self, id: &str, mut record: T) -> EngineResult<T> {
        record.set_id(id.to_string());
        let row = self
            .rows
            .get_mut(id)
            .ok_or_else(|| EngineError::not_found(T::ENTITY, id))?;
        record.validate()?;
        row.record = record.clone();
        Ok(record)
    }

    /// Deletes the record with `id`.
    pub fn remove(&mut self, id: &str) -> EngineResult<T> {
        self.rows
            .remove(id)
            .map(|row| row.record)
            .ok_or_else(|| EngineError::not_found(T::ENTITY, id))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A row that could not be inserted by [`Store::insert_many`].
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct BulkFailure {
    /// Position of the row in the submitted list.
    pub index: usize,
    /// Why the row was rejected.
    pub message: String,
}

/// Outcome of a bulk insert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, serde::Deserialize)]
pub struct BulkInsertResult {
    /// Ids of the rows that were inserted.
    pub inserted: Vec<String>,
    /// Rows that were skipped.
    pub failed: Vec<BulkFailure>,
}

/// All record tables.
#[derive(Debug, Default)]
pub struct Store {
    employees: RwLock<Table<Employee>>,
    rates: RwLock<Table<RateCard>>,
    budget_items: RwLock<Table<BudgetItem>>,
    overtime_items: RwLock<Table<OvertimeItem>>,
    special_assist_items: RwLock<Table<SpecialAssistItem>>,
    holidays: RwLock<Table<Holiday>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the configured rate table and holidays.
    pub fn seeded(config: &ConfigLoader) -> EngineResult<Self> {
        let store = Self::new();
        for card in config.rates().cards() {
            store.insert(card.clone())?;
        }
        for holiday in config.config().holidays() {
            store.insert(holiday.clone())?;
        }
        info!(
            rates = store.read::<RateCard>().len(),
            holidays = store.read::<Holiday>().len(),
            "Seeded store from configuration"
        );
        Ok(store)
    }

    fn read<T: Record>(&self) -> RwLockReadGuard<'_, Table<T>> {
        T::table(self).read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write<T: Record>(&self) -> RwLockWriteGuard<'_, Table<T>> {
        T::table(self).write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every record of a kind, in listing order.
    pub fn list<T: Record>(&self) -> Vec<T> {
        self.read::<T>().list()
    }

    /// Records of a kind belonging to one Buddhist year. Kinds without a
    /// year are returned unfiltered.
    pub fn list_for_year<T: Record>(&self, year: i32) -> Vec<T> {
        self.list::<T>()
            .into_iter()
            .filter(|r| r.year().is_none_or(|y| y == year))
            .collect()
    }

    /// One record by id.
    pub fn get<T: Record>(&self, id: &str) -> EngineResult<T> {
        self.read::<T>().get(id)
    }

    /// Adds a record.
    pub fn insert<T: Record>(&self, record: T) -> EngineResult<T> {
        self.write::<T>().insert(record)
    }

    /// Replaces a record.
    pub fn update<T: Record>(&self, id: &str, record: T) -> EngineResult<T> {
        self.write::<T>().update(id, record)
    }

    /// Deletes a record.
    pub fn remove<T: Record>(&self, id: &str) -> EngineResult<T> {
        self.write::<T>().remove(id)
    }

    /// Inserts rows one at a time. A failing row is logged and skipped;
    /// rows already inserted stay.
    pub fn insert_many<T: Record>(&self, records: Vec<T>) -> BulkInsertResult {
        let mut result = BulkInsertResult::default();
        let mut table = self.write::<T>();
        for (index, record) in records.into_iter().enumerate() {
            match table.insert(record) {
                Ok(inserted) => result.inserted.push(inserted.id().to_string()),
                Err(err) => {
                    warn!(entity = T::ENTITY, index, error = %err, "Skipping row in bulk insert");
                    result.failed.push(BulkFailure {
                        index,
                        message: err.to_string(),
                    });
                }
            }
        }
        result
    }

    /// The current master rate table.
    pub fn rate_table(&self) -> RateTable {
        RateTable::from_cards(self.list::<RateCard>())
    }
}

fn require_text(entity: &str, field: &str, value: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::invalid(entity, field, "must not be empty"));
    }
    Ok(())
}

impl Record for Employee {
    const ENTITY: &'static str = "employee";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn table(store: &Store) -> &RwLock<Table<Self>> {
        &store.employees
    }

    fn validate(&self) -> EngineResult<()> {
        require_text(Self::ENTITY, "name", &self.name)
    }
}

impl Record for RateCard {
    const ENTITY: &'static str = "master rate";

    fn id(&self) -> &str {
        &self.level
    }

    fn set_id(&mut self, id: String) {
        self.level = id;
    }

    fn table(store: &Store) -> &RwLock<Table<Self>> {
        &store.rates
    }

    fn validate(&self) -> EngineResult<()> {
        require_text(Self::ENTITY, "level", &self.level)
    }
}

impl Record for BudgetItem {
    const ENTITY: &'static str = "budget item";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn table(store: &Store) -> &RwLock<Table<Self>> {
        &store.budget_items
    }

    fn validate(&self) -> EngineResult<()> {
        require_text(Self::ENTITY, "name", &self.name)
    }

    fn sort_key(&self) -> i64 {
        self.sort_order
    }
}

impl Record for OvertimeItem {
    const ENTITY: &'static str = "overtime item";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn table(store: &Store) -> &RwLock<Table<Self>> {
        &store.overtime_items
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }
}

impl Record for SpecialAssistItem {
    const ENTITY: &'static str = "special assist item";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn table(store: &Store) -> &RwLock<Table<Self>> {
        &store.special_assist_items
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }
}

impl Record for Holiday {
    const ENTITY: &'static str = "holiday";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn table(store: &Store) -> &RwLock<Table<Self>> {
        &store.holidays
    }

    fn validate(&self) -> EngineResult<()> {
        require_text(Self::ENTITY, "name", &self.name)
    }

    fn year(&self) -> Option<i32> {
        Some(self.buddhist_year())
    }

    fn sort_key(&self) -> i64 {
        i64::from(self.date.num_days_from_ce())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(id: &str, name: &str) -> Employee {
        let mut e: Employee = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        e.id = id.to_string();
        e.name = name.to_string();
        e
    }

    #[test]
    fn test_insert_assigns_id_when_missing() {
        let store = Store::new();
        let inserted = store.insert(employee("", "สมชาย")).unwrap();
        assert!(!inserted.id.is_empty());
        assert_eq!(store.get::<Employee>(&inserted.id).unwrap().name, "สมชาย");
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let store = Store::new();
        store.insert(employee("e1", "ก")).unwrap();
        let err = store.insert(employee("e1", "ข")).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateRecord { .. }));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let store = Store::new();
        let err = store.insert(employee("e1", "  ")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid employee field 'name': must not be empty");
    }

    #[test]
    fn test_update_keeps_path_id() {
        let store = Store::new();
        store.insert(employee("e1", "ก")).unwrap();
        let updated = store.update("e1", employee("other", "ข")).unwrap();
        assert_eq!(updated.id, "e1");
        assert_eq!(store.list::<Employee>().len(), 1);
        assert_eq!(store.get::<Employee>("e1").unwrap().name, "ข");
    }

    #[test]
    fn test_update_and_remove_unknown_id() {
        let store = Store::new();
        assert!(matches!(
            store.update("nope", employee("", "ก")),
            Err(EngineError::RecordNotFound { .. })
        ));
        assert!(matches!(
            store.remove::<Employee>("nope"),
            Err(EngineError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_bulk_insert_skips_bad_rows() {
        let store = Store::new();
        let result = store.insert_many(vec![
            employee("e1", "ก"),
            employee("e2", ""),
            employee("e1", "ค"),
            employee("e3", "ง"),
        ]);
        assert_eq!(result.inserted, vec!["e1", "e3"]);
        let failed: Vec<usize> = result.failed.iter().map(|f| f.index).collect();
        assert_eq!(failed, vec![1, 2]);
        assert_eq!(store.list::<Employee>().len(), 2);
    }

    #[test]
    fn test_budget_items_list_in_sort_order() {
        let store = Store::new();
        for (id, order) in [("z", 1), ("a", 3), ("m", 2)] {
            store
                .insert(BudgetItem {
                    id: id.to_string(),
                    item_type: Default::default(),
                    code: String::new(),
                    name: id.to_string(),
                    amounts: Default::default(),
                    notes: String::new(),
                    sort_order: order,
                })
                .unwrap();
        }
        let ids: Vec<String> = store.list::<BudgetItem>().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }

    #[test]
    fn test_equal_sort_keys_keep_insertion_order() {
        let store = Store::new();
        for name in ["ค", "ก", "ข"] {
            store.insert(employee("", name)).unwrap();
        }
        let names: Vec<String> = store.list::<Employee>().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["ค", "ก", "ข"]);
    }

    #[test]
    fn test_update_keeps_list_position() {
        let store = Store::new();
        for (id, name) in [("e2", "ก"), ("e1", "ข"), ("e3", "ค")] {
            store.insert(employee(id, name)).unwrap();
        }
        store.update("e2", employee("", "ง")).unwrap();
        store.remove::<Employee>("e1").unwrap();
        store.insert(employee("e1", "จ")).unwrap();

        let ids: Vec<String> = store.list::<Employee>().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["e2", "e3", "e1"]);
    }

    #[test]
    fn test_list_for_year_filters_holidays() {
        let store = Store::new();
        for (id, y) in [("a", 2025), ("b", 2026)] {
            store
                .insert(Holiday {
                    id: id.to_string(),
                    date: NaiveDate::from_ymd_opt(y, 5, 1).unwrap(),
                    name: "วันแรงงาน".to_string(),
                })
                .unwrap();
        }
        let holidays = store.list_for_year::<Holiday>(2568);
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].id, "a");
    }

    #[test]
    fn test_seeded_from_config() {
        let config = ConfigLoader::load("./config").unwrap();
        let store = Store::seeded(&config).unwrap();
        let table = store.rate_table();
        assert_eq!(table.get("M1").unwrap().level, "M1");
        assert!(!store.list_for_year::<Holiday>(2568).is_empty());
    }
}
