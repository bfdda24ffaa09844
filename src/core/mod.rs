pub mod check;
pub mod dashboard;
pub mod hours;
pub mod refresh;
pub mod scheduler;

pub use dashboard::{Dashboard, DashboardOptions};
