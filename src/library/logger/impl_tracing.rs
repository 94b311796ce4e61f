use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Forwards log lines to `tracing`; the subscriber is installed by the server.
#[derive(Debug, Clone, Default)]
pub struct LoggerTracing {
    namespace: Option<String>,
}

impl LoggerTracing {
    pub fn new() -> Self {
        Self { namespace: None }
    }

    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("intellisort")
    }
}

impl Logger for LoggerTracing {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(namespace = self.namespace(), "{}", message);
        Ok(())
    }

    fn warn(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::warn!(namespace = self.namespace(), "{}", message);
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::error!(namespace = self.namespace(), "{}", message);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerTracing {
            namespace: Some(new_namespace),
        })
    }
}
