pub mod check;
pub mod config;
pub mod init;
pub mod show;
pub mod violations;
pub mod watch;

use crate::api::HttpApi;
use crate::config::Config;
use crate::core::{Dashboard, DashboardOptions};
use crate::errors::AppResult;

/// Dashboard wired to the HTTP API described by `cfg`.
pub fn http_dashboard(cfg: &Config, check_enabled: bool) -> AppResult<Dashboard<HttpApi>> {
    let api = HttpApi::new(&cfg.api_base_url)?;
    Ok(Dashboard::new(
        api,
        DashboardOptions {
            attendance_days: cfg.attendance_days,
            check_enabled,
        },
    ))
}
