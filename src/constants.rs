/// Shared string constants so stage predicates and adapters agree on names

/// Order status that qualifies a row for the mart
pub const DELIVERED_STATUS: &str = "delivered";

/// Delay status labels as the reporting layer expects them
pub const DELAY_STATUS_DELAYED: &str = "Delayed";
pub const DELAY_STATUS_ON_TIME: &str = "On Time";

/// Separator used for `metodos_pagamento` when no config file overrides it
pub const DEFAULT_METHOD_SEPARATOR: &str = ", ";

// Snapshot relation file names (one JSON array per relation)
pub const ORDERS_FILE: &str = "orders.json";
pub const CUSTOMERS_FILE: &str = "customers.json";
pub const PAYMENTS_FILE: &str = "payments.json";
pub const ORDER_ITEMS_FILE: &str = "order_items.json";
pub const REVIEWS_FILE: &str = "reviews.json";
