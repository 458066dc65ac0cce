// ==========================================
// Fleetify Import Core - Hierarchy Sorter
// ==========================================
// Role: insertion order for a chart-of-accounts batch
// Rule: (account_level asc, account_code asc), stable
// ==========================================

use crate::domain::account::{AccountRecord, OrderViolation};
use crate::importer::import_trait::HierarchySorter as HierarchySorterTrait;
use std::collections::HashMap;

pub struct HierarchySorter;

impl HierarchySorterTrait for HierarchySorter {
    fn order_for_insertion(&self, mut batch: Vec<AccountRecord>) -> Vec<AccountRecord> {
        batch.sort_by(|a, b| {
            a.account_level
                .cmp(&b.account_level)
                .then_with(|| a.account_code.cmp(&b.account_code))
        });
        batch
    }

    fn find_order_violations(&self, ordered: &[AccountRecord]) -> Vec<OrderViolation> {
        let positions: HashMap<&str, usize> = ordered
            .iter()
            .enumerate()
            .map(|(i, r)| (r.account_code.as_str(), i))
            .collect();

        ordered
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                let parent = record.parent_account_code.as_deref()?;
                let parent_position = *positions.get(parent)?;
                (parent_position > position).then(|| OrderViolation {
                    account_code: record.account_code.clone(),
                    parent_account_code: parent.to_string(),
                    position,
                    parent_position,
                })
            })
            .collect()
    }
}
