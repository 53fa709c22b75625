//! Route paths shared by links. The router itself needs literal paths, so
//! these must stay in step with `AppRoutes` and the `paygate` gate defaults.

pub const PAYMENT: &str = paygate::gate::config::DEFAULT_PAYMENT_PATH;
