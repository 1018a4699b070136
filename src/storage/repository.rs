//! Ledger repository
//!
//! `LedgerSource` is the capability set the balance service needs from a
//! backend. `SnapshotRepository` implements it over an in-memory snapshot
//! with per-household and per-expense indexes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{
    Expense, ExpenseId, ExpenseSplit, Household, HouseholdId, Member, Settlement,
};

use super::file_io::{read_json_required, write_json_atomic};
use super::snapshot::HouseholdSnapshot;

/// Record retrieval for one household at a time
pub trait LedgerSource {
    /// All known households
    fn households(&self) -> HouseholdResult<Vec<Household>>;

    /// Look up one household
    fn household(&self, id: HouseholdId) -> HouseholdResult<Option<Household>>;

    /// Members of a household, in join order
    fn members_by_household(&self, id: HouseholdId) -> HouseholdResult<Vec<Member>>;

    /// Expenses of a household, newest date first
    fn expenses_by_household(&self, id: HouseholdId) -> HouseholdResult<Vec<Expense>>;

    /// Split rows belonging to the given expenses
    fn splits_by_expense_ids(&self, ids: &[ExpenseId]) -> HouseholdResult<Vec<ExpenseSplit>>;

    /// Settlements of a household, newest date first
    fn settlements_by_household(&self, id: HouseholdId) -> HouseholdResult<Vec<Settlement>>;
}

#[derive(Default)]
struct Indexed {
    snapshot: HouseholdSnapshot,
    /// household_id -> positions in snapshot.members
    members: HashMap<HouseholdId, Vec<usize>>,
    /// household_id -> positions in snapshot.expenses
    expenses: HashMap<HouseholdId, Vec<usize>>,
    /// expense_id -> positions in snapshot.splits
    splits: HashMap<ExpenseId, Vec<usize>>,
    /// household_id -> positions in snapshot.settlements
    settlements: HashMap<HouseholdId, Vec<usize>>,
}

impl Indexed {
    fn build(snapshot: HouseholdSnapshot) -> Self {
        let mut indexed = Self::default();

        for (pos, member) in snapshot.members.iter().enumerate() {
            indexed.members.entry(member.household_id).or_default().push(pos);
        }
        for (pos, expense) in snapshot.expenses.iter().enumerate() {
            indexed.expenses.entry(expense.household_id).or_default().push(pos);
        }
        for (pos, split) in snapshot.splits.iter().enumerate() {
            indexed.splits.entry(split.expense_id).or_default().push(pos);
        }
        for (pos, settlement) in snapshot.settlements.iter().enumerate() {
            indexed
                .settlements
                .entry(settlement.household_id)
                .or_default()
                .push(pos);
        }

        indexed.snapshot = snapshot;
        indexed
    }

    fn select<T: Clone>(rows: &[T], positions: Option<&Vec<usize>>) -> Vec<T> {
        positions
            .map(|p| p.iter().map(|&i| rows[i].clone()).collect())
            .unwrap_or_default()
    }
}

/// In-memory ledger backed by a snapshot file
pub struct SnapshotRepository {
    path: Option<PathBuf>,
    data: RwLock<Indexed>,
}

impl SnapshotRepository {
    /// Create a repository bound to a snapshot file (not loaded yet)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            data: RwLock::new(Indexed::default()),
        }
    }

    /// Create an unbound repository from an existing snapshot
    pub fn from_snapshot(snapshot: HouseholdSnapshot) -> Self {
        Self {
            path: None,
            data: RwLock::new(Indexed::build(snapshot)),
        }
    }

    /// Load the snapshot file and rebuild indexes
    pub fn load(&self) -> HouseholdResult<()> {
        let path = self.bound_path()?;
        let snapshot: HouseholdSnapshot = read_json_required(path)?;

        for issue in snapshot.validate() {
            tracing::warn!(%issue, "inconsistent snapshot record");
        }
        tracing::info!(
            path = %path.display(),
            households = snapshot.households.len(),
            expenses = snapshot.expenses.len(),
            settlements = snapshot.settlements.len(),
            "loaded household snapshot"
        );

        self.replace(snapshot)
    }

    /// Write the current snapshot back to its file
    pub fn save(&self) -> HouseholdResult<()> {
        let path = self.bound_path()?;
        let data = self.read()?;
        write_json_atomic(path, &data.snapshot)?;
        tracing::info!(path = %path.display(), "saved household snapshot");
        Ok(())
    }

    /// Swap in a new snapshot
    pub fn replace(&self, snapshot: HouseholdSnapshot) -> HouseholdResult<()> {
        let mut data = self.write()?;
        *data = Indexed::build(snapshot);
        Ok(())
    }

    /// Append an expense and its split rows
    pub fn add_expense(&self, expense: Expense, splits: Vec<ExpenseSplit>) -> HouseholdResult<()> {
        self.append(|snapshot| {
            snapshot.expenses.push(expense);
            snapshot.splits.extend(splits);
        })
    }

    /// Append a settlement
    pub fn add_settlement(&self, settlement: Settlement) -> HouseholdResult<()> {
        self.append(|snapshot| snapshot.settlements.push(settlement))
    }

    /// Mutate the snapshot and rebuild indexes under one write lock
    fn append(&self, f: impl FnOnce(&mut HouseholdSnapshot)) -> HouseholdResult<()> {
        let mut data = self.write()?;
        let mut snapshot = std::mem::take(&mut data.snapshot);
        f(&mut snapshot);
        *data = Indexed::build(snapshot);
        Ok(())
    }

    /// The household to use when none is named: the first one in the snapshot
    pub fn default_household(&self) -> HouseholdResult<Household> {
        self.read()?
            .snapshot
            .households
            .first()
            .cloned()
            .ok_or_else(|| HouseholdError::household_not_found("(snapshot has no households)"))
    }

    fn bound_path(&self) -> HouseholdResult<&PathBuf> {
        self.path
            .as_ref()
            .ok_or_else(|| HouseholdError::Storage("Repository has no snapshot file".into()))
    }

    fn read(&self) -> HouseholdResult<std::sync::RwLockReadGuard<'_, Indexed>> {
        self.data
            .read()
            .map_err(|e| HouseholdError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> HouseholdResult<std::sync::RwLockWriteGuard<'_, Indexed>> {
        self.data
            .write()
            .map_err(|e| HouseholdError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

impl LedgerSource for SnapshotRepository {
    fn households(&self) -> HouseholdResult<Vec<Household>> {
        Ok(self.read()?.snapshot.households.clone())
    }

    fn household(&self, id: HouseholdId) -> HouseholdResult<Option<Household>> {
        Ok(self
            .read()?
            .snapshot
            .households
            .iter()
            .find(|h| h.id == id)
            .cloned())
    }

    fn members_by_household(&self, id: HouseholdId) -> HouseholdResult<Vec<Member>> {
        let data = self.read()?;
        Ok(Indexed::select(&data.snapshot.members, data.members.get(&id)))
    }

    fn expenses_by_household(&self, id: HouseholdId) -> HouseholdResult<Vec<Expense>> {
        let data = self.read()?;
        let mut expenses = Indexed::select(&data.snapshot.expenses, data.expenses.get(&id));
        expenses.sort_by(|a, b| {
            b.expense_date
                .cmp(&a.expense_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(expenses)
    }

    fn splits_by_expense_ids(&self, ids: &[ExpenseId]) -> HouseholdResult<Vec<ExpenseSplit>> {
        let data = self.read()?;
        Ok(ids
            .iter()
            .flat_map(|id| Indexed::select(&data.snapshot.splits, data.splits.get(id)))
            .collect())
    }

    fn settlements_by_household(&self, id: HouseholdId) -> HouseholdResult<Vec<Settlement>> {
        let data = self.read()?;
        let mut settlements =
            Indexed::select(&data.snapshot.settlements, data.settlements.get(&id));
        settlements.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(settlements)
    }
}
