//! CLI runner - executes commands

use crate::adapter::{Adapter, PageRequest};
use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::datasource::Datasource;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Serve { port } => {
                let settings = self.load_settings(*port)?;
                crate::cli::serve(settings).await
            }
            Commands::GetPage {
                request,
                request_json,
                pretty,
            } => {
                self.get_page(request.as_deref(), request_json.as_deref(), *pretty)
                    .await
            }
        }
    }

    /// Load settings, applying command-line overrides
    fn load_settings(&self, port: Option<u16>) -> Result<Settings> {
        Ok(Settings::load(self.cli.settings.as_deref())?.with_overrides(port, self.cli.timeout))
    }

    /// Load the page request
    fn load_request(file: Option<&Path>, inline: Option<&str>) -> Result<PageRequest> {
        // Inline request takes precedence
        if let Some(json_str) = inline {
            return serde_json::from_str(json_str)
                .map_err(|e| Error::input(format!("Invalid request JSON: {e}")));
        }

        let Some(path) = file else {
            return Err(Error::input(
                "No page request given (use --request or --request-json)",
            ));
        };

        let content = fs::read_to_string(path)
            .map_err(|e| Error::input(format!("Failed to read request file: {e}")))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::input(format!("Invalid request JSON: {e}")))
    }

    /// Fetch one page and print it
    async fn get_page(&self, file: Option<&Path>, inline: Option<&str>, pretty: bool) -> Result<()> {
        let settings = self.load_settings(None)?;
        let request = Self::load_request(file, inline)?;

        let adapter = Adapter::new(Datasource::new(settings.timeout_secs)?);
        let page = adapter.get_page(&request).await?;

        let output = if pretty {
            serde_json::to_string_pretty(&page)
        } else {
            serde_json::to_string(&page)
        }
        .map_err(|e| Error::internal(format!("Failed to serialize page: {e}")))?;

        println!("{output}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_request_inline() {
        let request = Runner::load_request(
            None,
            Some(r#"{"entity": {"external_id": "teams"}, "page_size": 10, "address": "api.pagerduty.com"}"#),
        )
        .unwrap();
        assert_eq!(request.entity.external_id, "teams");
        assert_eq!(request.page_size, 10);
    }

    #[test]
    fn test_load_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"entity": {{"external_id": "teams"}}, "page_size": 5, "cursor": "10", "address": "x"}}"#
        )
        .unwrap();

        let request = Runner::load_request(Some(file.path()), None).unwrap();
        assert_eq!(request.cursor, "10");
    }

    #[test]
    fn test_load_request_missing() {
        let err = Runner::load_request(None, None).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }

    #[test]
    fn test_load_request_invalid_json() {
        let err = Runner::load_request(None, Some("{not json")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid input: Invalid request JSON"));
    }
}
