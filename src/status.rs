//! Status-map operations: the persisted tip-id to completion-flag mapping.

use crate::catalog;
use crate::models::AppData;

impl AppData {
    pub fn get(&self, id: &str) -> Option<u8> {
        self.status.get(id).copied()
    }

    /// Records a completion flag. Values are clamped to 0/1.
    pub fn set(&mut self, id: &str, value: u8) {
        let flag = if value == 0 { 0 } else { 1 };
        self.status.insert(id.to_string(), flag);
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.get(id).unwrap_or(0) != 0
    }

    /// Number of tracked tips.
    pub fn tracked(&self) -> u64 {
        self.status.len() as u64
    }

    /// Number of completed tips.
    pub fn completed(&self) -> u64 {
        self.status.values().map(|&flag| u64::from(flag)).sum()
    }
}

/// Seeds a zero flag for every catalog tip when the map is empty. A non-empty
/// map is left untouched, even if the catalog changed since it was written;
/// stale keys keep counting toward the total.
pub fn seed_if_empty(data: &mut AppData) -> bool {
    if !data.status.is_empty() {
        return false;
    }
    for id in catalog::all_tip_ids() {
        data.status.insert(id, 0);
    }
    true
}
