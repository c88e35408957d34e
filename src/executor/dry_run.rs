//! Executor that prints actions instead of performing them.

use async_trait::async_trait;
use tracing::info;

use super::{ActionExecutor, ExecutorError};

/// Prints each action to stdout and logs it
#[derive(Debug, Clone, Default)]
pub struct DryRunExecutor;

impl DryRunExecutor {
    fn report(&self, line: String) {
        info!("[dry-run] {}", line);
        println!("{}", line);
    }
}

#[async_trait]
impl ActionExecutor for DryRunExecutor {
    async fn open_url(&self, url: &str) -> Result<(), ExecutorError> {
        self.report(format!("open-url {}", url));
        Ok(())
    }

    async fn open_app_scheme(&self, scheme: &str) -> Result<(), ExecutorError> {
        self.report(format!("open-app {}", scheme));
        Ok(())
    }

    async fn dial(&self, phone_number: &str) -> Result<(), ExecutorError> {
        self.report(format!("dial tel:{}", phone_number));
        Ok(())
    }

    async fn launch_contact_picker(&self) -> Result<(), ExecutorError> {
        self.report("contact-picker".to_string());
        Ok(())
    }

    async fn speak(&self, text: &str) -> Result<(), ExecutorError> {
        self.report(format!("speak \"{}\"", text));
        Ok(())
    }
}
