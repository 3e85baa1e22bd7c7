//! The `OutputWriter` trait implemented by backend writers.

use qs_stats::StatisticsSnapshot;

use crate::{AgentRow, HandlerRow, OutputResult, StepRow, SummaryRow};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write one clock-step row.
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()>;

    /// Write the per-agent rows of a finished run.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Write the per-handler rows of a finished run.
    fn write_handlers(&mut self, rows: &[HandlerRow]) -> OutputResult<()>;

    /// Write the run-level summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Write every table derived from `snapshot`.
    fn write_snapshot(&mut self, snapshot: &StatisticsSnapshot) -> OutputResult<()> {
        let agents: Vec<AgentRow> = snapshot.agents.iter().map(AgentRow::from).collect();
        let handlers: Vec<HandlerRow> = snapshot.handlers.iter().map(HandlerRow::from).collect();
        self.write_agents(&agents)?;
        self.write_handlers(&handlers)?;
        self.write_summary(&SummaryRow::from(snapshot))
    }

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
