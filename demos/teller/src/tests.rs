//! Tests for the teller run file.

#[cfg(test)]
mod run_file {
    use std::path::PathBuf;

    use qs_core::{Bounds, QsError};

    use crate::{RunConfig, check_duration, parse_run_config, teller_queue};

    #[test]
    fn empty_file_uses_teller_defaults() {
        let run = parse_run_config("{}").unwrap();
        assert_eq!(run.queue, teller_queue());
        assert_eq!(run.duration, 480);
        assert_eq!(run.seed, Some(42));
        assert_eq!(run.output_dir, PathBuf::from("output/teller"));
        assert!(!run.list_agents);
    }

    #[test]
    fn partial_queue_merges_over_teller_defaults() {
        let run = parse_run_config(
            r#"{ "queue": { "arrival": { "min": 2, "max": 6 }, "handler_count": 5 } }"#,
        )
        .unwrap();
        assert_eq!(run.queue.arrival, Bounds::new(2, 6));
        assert_eq!(run.queue.handler_count, 5);
        assert_eq!(run.queue.service, Bounds::new(4, 12));
        assert_eq!(run.queue.queue_capacity, 8);
    }

    #[test]
    fn null_seed_means_entropy() {
        let run = parse_run_config(r#"{ "seed": null, "duration": 60 }"#).unwrap();
        assert_eq!(run.seed, None);
        assert_eq!(run.duration, 60);
    }

    #[test]
    fn zero_duration_rejected() {
        let run = RunConfig { duration: 0, ..RunConfig::default() };
        assert!(matches!(check_duration(&run), Err(QsError::Config(_))));
        assert!(check_duration(&RunConfig::default()).is_ok());
    }

    #[test]
    fn malformed_queue_is_a_parse_error() {
        assert!(parse_run_config(r#"{ "queue": { "handler_count": "three" } }"#).is_err());
    }
}
