//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes word counting and word-cloud layout to AI assistants over stdio.
//! Each `#[tool]` method delegates to `wordtally_core`; nothing here counts
//! or ranks on its own.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use wordtally_core::config::Config;
use wordtally_core::{
    FrequencyReport, Locale, RandomSource, SeededRandom, Session, SourceKind, StopWordsReport,
    ThreadRandom, WordCloudReport,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// How to interpret the text: "text", "titles", "comments", or "markdown".
    #[serde(default)]
    pub source: SourceKind,
    /// Locale for default stop words: "en" or "ko".
    pub locale: Option<Locale>,
    /// Extra words to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Number of ranked words to return (default 20).
    pub top: Option<usize>,
}

/// Parameters for the `word_cloud` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct WordCloudParams {
    /// The text to analyze.
    pub text: String,
    /// How to interpret the text: "text", "titles", "comments", or "markdown".
    #[serde(default)]
    pub source: SourceKind,
    /// Locale for default stop words: "en" or "ko".
    pub locale: Option<Locale>,
    /// Extra words to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Number of ranked words to return (default 20).
    pub top: Option<usize>,
    /// Number of words in the cloud (default 100).
    pub cloud_words: Option<usize>,
    /// Seed for reproducible rotation and color.
    pub seed: Option<u64>,
}

/// Parameters for the `list_stop_words` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListStopWordsParams {
    /// Locale to list: "en" or "ko".
    pub locale: Option<Locale>,
}

/// MCP server exposing word-frequency analysis.
///
/// Configured stop words, list sizes, and the input limit apply to every
/// tool call.
#[derive(Clone)]
pub struct WordtallyServer {
    config: Config,
    max_input: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for WordtallyServer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl WordtallyServer {
    /// Create a server with the loaded configuration.
    pub fn new(config: Config) -> Self {
        let max_input = config.input_limit();
        Self {
            config,
            max_input,
            tool_router: Self::tool_router(),
        }
    }

    /// Replace the input size limit (`None` disables it).
    #[must_use]
    pub fn with_max_input(mut self, max_input: Option<usize>) -> Self {
        self.max_input = max_input;
        self
    }

    fn session(
        &self,
        text: &str,
        source: SourceKind,
        locale: Option<Locale>,
        exclude: &[String],
    ) -> Result<Session, McpError> {
        if let Some(max) = self.max_input
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            ));
        }

        let prepared = source.prepare(text);
        if prepared.trim().is_empty() {
            return Err(McpError::invalid_params(
                "nothing to analyze: text is empty",
                None,
            ));
        }

        let stop_words = self
            .config
            .stop_word_set(locale)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let mut session = Session::with_stop_words(stop_words);
        for word in exclude {
            session
                .add_stop_word(word)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        }
        session.set_text(prepared);
        Ok(session)
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Count word frequencies.
    #[tool(
        description = "Count word frequencies in text after removing punctuation and stop words. Returns words ranked by count, highest first."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            source = ?params.source,
            locale = ?params.locale,
            "executing MCP tool"
        );

        let session = self.session(&params.text, params.source, params.locale, &params.exclude)?;
        let limit = params
            .top
            .unwrap_or_else(|| self.config.top_words_or_default());
        let report = FrequencyReport::build(session.table(), session.stop_words(), Some(limit));
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_text",
            unique = report.unique_words,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Lay out a word cloud.
    #[tool(
        description = "Build a word cloud from text. Returns the top words with font size, opacity, rotation, and color, plus a ranked list."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn word_cloud(
        &self,
        Parameters(params): Parameters<WordCloudParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "word_cloud",
            seed = ?params.seed,
            "executing MCP tool"
        );

        let session = self.session(&params.text, params.source, params.locale, &params.exclude)?;
        let mut rng: Box<dyn RandomSource> = match params.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom::default()),
        };
        let report = WordCloudReport::build_with_limits(
            session.table(),
            session.stop_words(),
            params
                .top
                .unwrap_or_else(|| self.config.top_words_or_default()),
            params
                .cloud_words
                .unwrap_or_else(|| self.config.cloud_words_or_default()),
            rng.as_mut(),
        );
        let json = to_json(&report)?;

        tracing::info!(
            tool = "word_cloud",
            cloud = report.cloud.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List stop words.
    #[tool(description = "List the default and configured stop words for a locale (en or ko).")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn list_stop_words(
        &self,
        Parameters(params): Parameters<ListStopWordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_stop_words", locale = ?params.locale, "executing MCP tool");

        let set = self
            .config
            .stop_word_set(params.locale)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let json = to_json(&StopWordsReport::from(&set))?;

        tracing::info!(tool = "list_stop_words", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for WordtallyServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for ranked word counts and word_cloud for layout.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
