use crate::api::{AttendanceApi, HttpApi};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// Handle the `violations` command: list the alerts recorded by the server.
pub async fn handle(cfg: &Config) -> AppResult<()> {
    let api = HttpApi::new(&cfg.api_base_url)?;
    let mut alerts = api.violations().await?;

    if alerts.is_empty() {
        info("No core-time violations recorded");
        return Ok(());
    }

    alerts.sort_by(|a, b| {
        (&a.alert_date, a.alert_period, &a.student_id).cmp(&(&b.alert_date, b.alert_period, &b.student_id))
    });

    let mut table = Table::new(vec![
        Column::new("日付"),
        Column::new("時限"),
        Column::new("学籍番号"),
    ]);
    for alert in &alerts {
        table.add_row(vec![
            alert.alert_date.clone(),
            alert
                .alert_period
                .map(|p| format!("{p}限"))
                .unwrap_or_else(|| "-".to_string()),
            alert.student_id.clone(),
        ]);
    }
    print!("{}", table.render());
    info(format!("{} violation(s)", alerts.len()));
    Ok(())
}
