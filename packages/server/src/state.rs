use std::sync::Arc;

use rapport_engine::ReportRenderer;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<ReportRenderer>,
    pub config: Arc<AppConfig>,
}
