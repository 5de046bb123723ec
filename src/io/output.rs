use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::model::{Problem, SelectionCriteria};
use crate::rating::{describe, RatingDescriptor};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored cards for the terminal
    Terminal,
    /// Machine-readable JSON report
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// One rendered result: a problem plus its rating descriptor and link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemCard {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub rating: Option<u32>,
    pub descriptor: Option<RatingDescriptor>,
    pub tags: Vec<String>,
    pub url: Option<String>,
}

impl ProblemCard {
    pub fn new(position: usize, problem: &Problem) -> Self {
        Self {
            position,
            id: problem.id().to_string(),
            name: problem.name.clone(),
            rating: problem.rating,
            descriptor: problem.rating.map(|r| describe(i64::from(r))),
            tags: problem.tags.clone(),
            url: problem.url(),
        }
    }

    /// `1200 (Pupil)`, or `unrated`.
    pub fn rating_label(&self) -> String {
        match (self.rating, self.descriptor) {
            (Some(rating), Some(d)) => format!("{} ({})", rating, d.title),
            _ => "unrated".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PickReport {
    pub generated_at: DateTime<Utc>,
    pub version: &'static str,
    pub criteria: SelectionCriteria,
    pub problems: Vec<ProblemCard>,
}

impl PickReport {
    pub fn new(criteria: SelectionCriteria, problems: &[Problem]) -> Self {
        Self::at(Utc::now(), criteria, problems)
    }

    pub fn at(
        generated_at: DateTime<Utc>,
        criteria: SelectionCriteria,
        problems: &[Problem],
    ) -> Self {
        Self {
            generated_at,
            version: env!("CARGO_PKG_VERSION"),
            criteria,
            problems: problems
                .iter()
                .enumerate()
                .map(|(i, p)| ProblemCard::new(i + 1, p))
                .collect(),
        }
    }

    fn topic_label(&self) -> &str {
        self.criteria
            .topic
            .as_ref()
            .map_or("all topics", |t| t.as_str())
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &PickReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &PickReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &PickReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Selected Problems")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            self.writer,
            "Range: {} | Topic: {}",
            report.criteria.range,
            report.topic_label()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table(&mut self, report: &PickReport) -> anyhow::Result<()> {
        writeln!(self.writer, "| # | Problem | Rating | Title | Tags |")?;
        writeln!(self.writer, "|---|---------|--------|-------|------|")?;
        for card in &report.problems {
            let name = escape_cell(&card.name);
            let problem = match &card.url {
                Some(url) => format!("[{}]({})", name, url),
                None => name,
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                card.position,
                problem,
                card.rating.map_or_else(|| "-".to_string(), |r| r.to_string()),
                card.descriptor.map_or("-", |d| d.title),
                escape_cell(&card.tags.join(", "))
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &PickReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_table(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
        }
    }

    fn write_card(&mut self, card: &ProblemCard) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "#{}  {}  {}",
            card.position,
            self.formatter.bold(&card.name),
            self.formatter.dim(&format!("({})", card.id))
        )?;

        let rating = match card.descriptor {
            Some(d) => self.formatter.rating(&card.rating_label(), d.bucket),
            None => self.formatter.dim(&card.rating_label()),
        };
        if card.tags.is_empty() {
            writeln!(self.writer, "    {}", rating)?;
        } else {
            writeln!(
                self.writer,
                "    {} | {}",
                rating,
                self.formatter.dim(&card.tags.join(", "))
            )?;
        }

        if let Some(url) = &card.url {
            writeln!(self.writer, "    Solve Problem: {}", self.formatter.link(url))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &PickReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Selected Problems"))?;
        writeln!(
            self.writer,
            "Here are {} random problems matching your criteria ({}, {})",
            report.problems.len(),
            report.criteria.range,
            report.topic_label()
        )?;
        writeln!(self.writer)?;
        for card in &report.problems {
            self.write_card(card)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
