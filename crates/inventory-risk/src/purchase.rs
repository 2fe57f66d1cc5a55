use crate::item::InventoryItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub item_id: u32,
    pub item_name: String,
    pub supplier: String,
    pub qty: u64,
    pub created_on: NaiveDate,
}

/// Orders enough to reach twice the reorder level, and at least one unit.
pub fn suggest_purchase_order(item: &InventoryItem, created_on: NaiveDate) -> PurchaseOrder {
    let target = i64::from(item.reorder_level) * 2;
    let qty = (target - i64::from(item.current_stock)).max(1) as u64;
    PurchaseOrder {
        item_id: item.id,
        item_name: item.name.clone(),
        supplier: item.supplier.clone(),
        qty,
        created_on,
    }
}

/// Orders for every item at or below its reorder level.
pub fn suggest_purchase_orders(items: &[InventoryItem], created_on: NaiveDate) -> Vec<PurchaseOrder> {
    items
        .iter()
        .filter(|i| i.needs_reorder())
        .map(|i| suggest_purchase_order(i, created_on))
        .collect()
}

/// Copy of `item` after receiving `qty` units on `on`.
pub fn restock(item: &InventoryItem, qty: u32, on: NaiveDate) -> InventoryItem {
    InventoryItem {
        current_stock: item.current_stock.saturating_add(qty),
        last_restocked: Some(on),
        ..item.clone()
    }
}
