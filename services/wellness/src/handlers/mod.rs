pub mod analytics;
pub mod assessment;
pub mod consent;
pub mod health;
pub mod progress;
pub mod session;
