//! Renderer module
//!
//! Renders the run Report to different output formats: jsonl, json, md

use crate::core::model::{Kind, Report, ReportItem};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for run reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
        }
    }

    /// Render to a writer, terminating output with a newline
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        if output.is_empty() {
            return Ok(());
        }
        writer.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, report: &Report) -> String {
        report
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, report: &Report) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&report.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&report.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, report: &Report) -> String {
        let mut output = format!(
            "# Glossary build\n\nGenerated at {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        let mut pages = Vec::new();
        let mut warnings = Vec::new();
        for item in &report.items {
            match item.kind {
                Kind::Index | Kind::Term => pages.push(item),
                Kind::Warning => warnings.push(item),
            }
        }

        if !warnings.is_empty() {
            output.push_str("## Warnings\n\n");
            for item in warnings {
                for warning in &item.warnings {
                    output.push_str(&format!("- **{}**: {}", warning.code.as_str(), warning.message));
                    if let (Some(term), Some(line)) = (&warning.term, warning.line) {
                        output.push_str(&format!(" (`{}`, line {})", term, line));
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        if !pages.is_empty() {
            output.push_str("## Pages\n\n");
            for item in pages {
                self.render_page_md(&mut output, item);
            }
            output.push('\n');
        }

        output
    }

    fn render_page_md(&self, output: &mut String, item: &ReportItem) {
        if let Some(path) = &item.path {
            output.push_str(&format!("- `{}`", path));
            if let Some(size) = item.meta.size {
                output.push_str(&format!(" ({} bytes", size));
                if let Some(links) = item.meta.links {
                    output.push_str(&format!(", {} links", links));
                }
                output.push(')');
            }
            output.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Meta, Warning, WarningCode};

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.push(ReportItem::index("out/index.html"));
        report.push(ReportItem::term("word", "out/word.html").with_meta(Meta {
            size: Some(120),
            hash: Some("00".to_string()),
            links: Some(3),
        }));
        report
    }

    #[test]
    fn test_render_jsonl() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render(&sample_report());

        assert!(output.contains("out/index.html"));
        assert!(output.contains("out/word.html"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_render_json() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Json, false));
        let output = renderer.render(&sample_report());

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_render_json_pretty() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Json, true));
        let output = renderer.render(&sample_report());
        assert!(output.contains("  "));
    }

    #[test]
    fn test_render_markdown() {
        let mut report = sample_report();
        report.push(ReportItem::warning(
            Warning::new(WarningCode::DuplicateTerm, "term redefined").with_term("word", 9),
        ));
        let renderer =
            Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Markdown, false));
        let output = renderer.render(&report);

        assert!(output.starts_with("# Glossary build"));
        assert!(output.contains("## Warnings"));
        assert!(output.contains("**DUPLICATE_TERM**: term redefined (`word`, line 9)"));
        assert!(output.contains("## Pages"));
        assert!(output.contains("`out/word.html` (120 bytes, 3 links)"));
    }

    #[test]
    fn test_render_to_writer() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let mut buffer = Vec::new();
        renderer.render_to(&sample_report(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));
        assert!(output.contains("word.html"));
    }

    #[test]
    fn test_render_to_writer_empty() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let mut buffer = Vec::new();
        renderer.render_to(&Report::new(), &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        let result = "raw".parse::<OutputFormat>();
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_output_format_default() {
        let format: OutputFormat = Default::default();
        assert_eq!(format, OutputFormat::Jsonl);
    }
}
