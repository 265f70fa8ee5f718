use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::page_range;
use crate::pdf::PdfDocument;
use crate::reorder::{self, NoProgress};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfInfoRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfReverseRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(
        description = "Page range to reverse, 1-indexed inclusive (e.g. '2-5'); omit for all pages"
    )]
    #[serde(default)]
    pub pages: Option<String>,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Clone)]
pub struct ReverseServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl ReverseServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for ReverseServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ReverseServer {
    #[tool(description = "Get PDF metadata including page count, title, author, and producer")]
    fn pdf_info(&self, Parameters(PdfInfoRequest { path }): Parameters<PdfInfoRequest>) -> String {
        match PdfDocument::open(&path) {
            Ok(doc) => {
                let info = doc.info();
                let result = PdfInfoResult {
                    path,
                    page_count: info.page_count,
                    title: info.title,
                    author: info.author,
                    producer: info.producer,
                    creation_date: info.creation_date,
                };
                serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(
        description = "Reverse the page order of a PDF and save the result to a new file. \
        Pass pages as '2-5' to reverse only that 1-indexed inclusive range; pages outside \
        the range keep their positions. Unparseable ranges fall back to all pages."
    )]
    fn pdf_reverse(&self, Parameters(req): Parameters<PdfReverseRequest>) -> String {
        let mut doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let total = doc.page_count();

        let resolution = page_range::resolve(req.pages.as_deref(), total);
        if let Some(warning) = &resolution.warning {
            log::warn!("{warning}");
        }

        let order = reorder::reorder(&doc.page_ids(), resolution.span, &mut NoProgress);
        if let Err(e) = doc.apply_order(&order) {
            return format!("Error: {}", e);
        }
        if let Err(e) = doc.save(&req.output) {
            return format!("Error: {}", e);
        }

        let result = ReverseResult {
            output_path: req.output,
            page_count: total,
            reversed_from: resolution.span.start + 1,
            reversed_to: resolution.span.end,
            warning: resolution.warning.map(|w| w.to_string()),
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PdfInfoResult {
    pub path: String,
    pub page_count: usize,
    pub title: Option<String>,
    pub author: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ReverseResult {
    pub output_path: String,
    pub page_count: usize,
    /// First and last reversed page, 1-indexed inclusive.
    pub reversed_from: usize,
    pub reversed_to: usize,
    pub warning: Option<String>,
}

impl ServerHandler for ReverseServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF page reversal tools. Use pdf_info to get document metadata and \
                 pdf_reverse to reverse the page order of a document, optionally \
                 restricted to a contiguous page range."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = ReverseServer::new();

    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
