//! Tests for qs-output.

use qs_core::{Bounds, QueueConfig};
use qs_sim::{Simulator, SimulatorBuilder};
use tempfile::TempDir;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn fixed_sim(gap: u64, service: u64, handlers: u32, capacity: u32) -> Simulator {
    let config = QueueConfig {
        arrival:        Bounds::fixed(gap),
        service:        Bounds::fixed(service),
        handler_count:  handlers,
        queue_capacity: capacity,
    };
    SimulatorBuilder::new(config).seed(7).build().unwrap()
}

fn read_rows(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

fn read_headers(dir: &TempDir, file: &str) -> Vec<String> {
    let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
    rdr.headers().unwrap().iter().map(str::to_owned).collect()
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::{AgentRow, CsvWriter, HandlerRow, OutputWriter, StepRow};

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        for file in ["steps.csv", "agents.csv", "handlers.csv", "summary.csv"] {
            assert!(dir.path().join(file).exists(), "{file} missing");
        }
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(read_headers(&dir, "steps.csv"), ["tick", "delta", "queue_len", "busy"]);
        assert_eq!(
            read_headers(&dir, "agents.csv"),
            ["agent_id", "arrival_gap", "service_duration", "queue_wait", "handler_id", "status"],
        );
        assert_eq!(read_headers(&dir, "handlers.csv"), ["handler_id", "processed", "processed_percent"]);
        assert_eq!(read_headers(&dir, "summary.csv").len(), 9);
    }

    #[test]
    fn step_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step(&StepRow { tick: 4, delta: 4, queue_len: 0, busy: 1 }).unwrap();
        w.write_step(&StepRow { tick: 9, delta: 5, queue_len: 2, busy: 1 }).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir, "steps.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "9");
        assert_eq!(&rows[1][1], "5");
        assert_eq!(&rows[1][2], "2");
    }

    #[test]
    fn missing_handler_written_as_empty_field() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [
            AgentRow {
                agent_id:         1,
                arrival_gap:      3,
                service_duration: 8,
                queue_wait:       0,
                handler_id:       Some(2),
                status:           "free".into(),
            },
            AgentRow {
                agent_id:         2,
                arrival_gap:      1,
                service_duration: 8,
                queue_wait:       0,
                handler_id:       None,
                status:           "declined".into(),
            },
        ];
        w.write_agents(&rows).unwrap();
        w.finish().unwrap();

        let read = read_rows(&dir, "agents.csv");
        assert_eq!(&read[0][4], "2");
        assert_eq!(&read[1][4], "");
        assert_eq!(&read[1][5], "declined");
    }

    #[test]
    fn percentages_have_two_decimals() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_handlers(&[HandlerRow { handler_id: 1, processed: 1, processed_percent: 100.0 / 3.0 }])
            .unwrap();
        w.finish().unwrap();

        let read = read_rows(&dir, "handlers.csv");
        assert_eq!(&read[0][2], "33.33");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_io_or_csv_error() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("does/not/exist"));
        assert!(result.is_err());
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::{AgentRow, HandlerRow, SummaryRow};

    #[test]
    fn rows_from_snapshot() {
        let mut sim = fixed_sim(20, 10, 1, 10);
        let s = sim.simulate(100);

        let agent = AgentRow::from(&s.agents[0]);
        assert_eq!(agent.agent_id, 1);
        assert_eq!(agent.arrival_gap, 20);
        assert_eq!(agent.handler_id, Some(1));
        assert_eq!(agent.status, "free");

        let handler = HandlerRow::from(&s.handlers[0]);
        assert_eq!(handler.processed, 4);
        assert_eq!(handler.processed_percent, 100.0);

        let summary = SummaryRow::from(&s);
        assert_eq!(summary.duration, 100);
        assert_eq!(summary.arrived, 4);
        assert_eq!(summary.declined, 0);
        assert_eq!(summary.percent, 100.0);
        assert_eq!(summary.max_queue_length, 0);
    }
}

// ── TraceObserver ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, TraceObserver};
    use crate::{AgentRow, HandlerRow, StepRow, SummaryRow};

    /// Writer that fails every step write.
    struct FailingWriter {
        finished: bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_step(&mut self, _row: &StepRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_agents(&mut self, _rows: &[AgentRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_handlers(&mut self, _rows: &[HandlerRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_summary(&mut self, _row: &SummaryRow) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn full_run_writes_every_table() {
        let dir = tmp();
        let mut sim = fixed_sim(20, 10, 1, 10);
        let mut obs = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());
        let s = sim.simulate_with(100, &mut obs);
        assert!(obs.take_error().is_none());
        // Arrivals at 20, 40, 60, 80 and completions ten ticks later.
        assert_eq!(obs.steps_written(), 8);
        obs.finish(&s).unwrap();

        let steps = read_rows(&dir, "steps.csv");
        assert_eq!(steps.len(), 8);
        assert_eq!((&steps[0][0], &steps[0][1], &steps[0][3]), ("20", "20", "1"));
        assert_eq!((&steps[1][0], &steps[1][1], &steps[1][3]), ("30", "10", "0"));
        assert_eq!(&steps[7][0], "90");

        assert_eq!(read_rows(&dir, "agents.csv").len(), 4);
        assert_eq!(read_rows(&dir, "handlers.csv").len(), 1);

        let summary = read_rows(&dir, "summary.csv");
        assert_eq!(summary.len(), 1);
        assert_eq!(&summary[0][1], "4");
        assert_eq!(&summary[0][4], "100.00");
    }

    #[test]
    fn empty_run_writes_headers_and_zero_summary() {
        let dir = tmp();
        let mut sim = fixed_sim(200, 10, 2, 3);
        let mut obs = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());
        let s = sim.simulate_with(100, &mut obs);
        obs.finish(&s).unwrap();

        assert!(read_rows(&dir, "steps.csv").is_empty());
        assert!(read_rows(&dir, "agents.csv").is_empty());
        assert_eq!(read_rows(&dir, "handlers.csv").len(), 2);
        let summary = read_rows(&dir, "summary.csv");
        assert_eq!(&summary[0][4], "0.00");
        assert_eq!(&summary[0][5], "0.00");
    }

    #[test]
    fn first_write_error_is_stored() {
        let mut sim = fixed_sim(20, 10, 1, 10);
        let mut obs = TraceObserver::new(FailingWriter { finished: false });
        let _ = sim.simulate_with(100, &mut obs);
        assert_eq!(obs.steps_written(), 0);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn finish_surfaces_stored_error() {
        let mut sim = fixed_sim(20, 10, 1, 10);
        let mut obs = TraceObserver::new(FailingWriter { finished: false });
        let s = sim.simulate_with(100, &mut obs);
        assert!(obs.finish(&s).is_err());
    }

    #[test]
    fn finish_closes_the_writer() {
        let mut sim = fixed_sim(200, 10, 1, 10);
        let mut obs = TraceObserver::new(FailingWriter { finished: false });
        let s = sim.simulate_with(100, &mut obs);
        let w = obs.finish(&s).unwrap();
        assert!(w.finished);
    }
}
