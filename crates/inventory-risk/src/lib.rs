pub mod alert;
pub mod item;
pub mod purchase;
pub mod risk;
pub mod summary;

pub use alert::{derive_alerts, AlertKind, InventoryAlert};
pub use item::{Criticality, InventoryItem, ItemCategory, PatientFlowPoint};
pub use purchase::{restock, suggest_purchase_order, suggest_purchase_orders, PurchaseOrder};
pub use risk::{
    compute_inventory_risk, demand_factor_from_flow, forecast_item, InventoryRisk, ItemForecast,
    RiskContext,
};
pub use summary::{top_by_next_day, InventorySummary};
