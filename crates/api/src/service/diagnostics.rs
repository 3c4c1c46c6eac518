use crate::{
    abstract_trait::{diagnostics::DiagnosticsServiceTrait, document::DynDocumentStore},
    domain::response::diagnostics::DiagnosticsReport,
};
use async_trait::async_trait;
use tracing::info;

const COLLECTION_LIMIT: i64 = 10;
const ERROR_SNIPPET_LEN: usize = 50;

#[derive(Clone)]
pub struct DiagnosticsService {
    store: DynDocumentStore,
}

impl DiagnosticsService {
    pub fn new(store: DynDocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DiagnosticsServiceTrait for DiagnosticsService {
    async fn test_database(&self) -> DiagnosticsReport {
        info!("🩺 Running store diagnostics");

        let mut report = DiagnosticsReport::default();

        match self.store.ping().await {
            Ok(()) => {
                report.database = "✅ Available".to_string();
                report.connection_status = "Connected".to_string();

                match self.store.database_name().await {
                    Ok(name) => report.store_name = Some(name),
                    Err(e) => {
                        report.store_name =
                            Some(format!("⚠️  Error: {}", snippet(&e.to_string())));
                    }
                }

                match self.store.list_collections(COLLECTION_LIMIT).await {
                    Ok(collections) => {
                        report.collections = collections;
                        report.database = "✅ Connected & Working".to_string();
                    }
                    Err(e) => {
                        report.database =
                            format!("⚠️  Connected but Error: {}", snippet(&e.to_string()));
                    }
                }
            }
            Err(e) => {
                report.database = format!("❌ Error: {}", snippet(&e.to_string()));
            }
        }

        report.database_url = env_presence("DATABASE_URL");
        report.database_name = env_presence("DATABASE_NAME");

        report
    }
}

fn env_presence(name: &str) -> String {
    if std::env::var(name).is_ok() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

fn snippet(message: &str) -> String {
    message.chars().take(ERROR_SNIPPET_LEN).collect()
}
