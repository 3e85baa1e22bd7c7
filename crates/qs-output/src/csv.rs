//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentRow, HandlerRow, OutputResult, StepRow, SummaryRow};

/// Writes run output to four CSV files.
pub struct CsvWriter {
    steps:    Writer<File>,
    agents:   Writer<File>,
    handlers: Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("steps.csv"))?;
        steps.write_record(["tick", "delta", "queue_len", "busy"])?;

        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record([
            "agent_id", "arrival_gap", "service_duration", "queue_wait", "handler_id", "status",
        ])?;

        let mut handlers = Writer::from_path(dir.join("handlers.csv"))?;
        handlers.write_record(["handler_id", "processed", "processed_percent"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record([
            "duration", "arrived", "processed", "declined", "percent",
            "blocking_percent", "decline_percent", "mean_queue_wait", "max_queue_length",
        ])?;

        Ok(Self {
            steps,
            agents,
            handlers,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.tick.to_string(),
            row.delta.to_string(),
            row.queue_len.to_string(),
            row.busy.to_string(),
        ])?;
        Ok(())
    }

    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.arrival_gap.to_string(),
                row.service_duration.to_string(),
                row.queue_wait.to_string(),
                row.handler_id.map(|h| h.to_string()).unwrap_or_default(),
                row.status.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_handlers(&mut self, rows: &[HandlerRow]) -> OutputResult<()> {
        for row in rows {
            self.handlers.write_record(&[
                row.handler_id.to_string(),
                row.processed.to_string(),
                format!("{:.2}", row.processed_percent),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.duration.to_string(),
            row.arrived.to_string(),
            row.processed.to_string(),
            row.declined.to_string(),
            format!("{:.2}", row.percent),
            format!("{:.2}", row.blocking_percent),
            format!("{:.2}", row.decline_percent),
            format!("{:.2}", row.mean_queue_wait),
            row.max_queue_length.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.agents.flush()?;
        self.handlers.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
