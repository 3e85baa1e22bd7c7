//! Unit tests for qs-stats.

#[cfg(test)]
mod snapshot {
    use qs_agent::{Agent, AgentStatus};
    use qs_core::{AgentId, HandlerId};

    use crate::{StatisticsSnapshot, percent_of};

    fn handlers(n: u32) -> Vec<HandlerId> {
        (1..=n).map(HandlerId).collect()
    }

    /// Agent forced into `status`, served by `handler` where that applies.
    fn agent(id: u32, status: AgentStatus, handler: u32, wait: u64) -> Agent {
        let mut a = Agent::new(AgentId(id), 10, 5);
        match status {
            AgentStatus::None => {}
            AgentStatus::Declined => a.decline(),
            AgentStatus::InQueue => {
                a.enqueue();
                a.wait(wait);
            }
            AgentStatus::OnService | AgentStatus::Free => {
                a.enqueue();
                a.wait(wait);
                a.start_service(HandlerId(handler));
                if status == AgentStatus::Free {
                    a.finish();
                }
            }
        }
        a
    }

    #[test]
    fn percent_of_zero_whole_is_zero() {
        assert_eq!(percent_of(0, 0), 0.0);
        assert_eq!(percent_of(3, 0), 0.0);
        assert_eq!(percent_of(1, 4), 25.0);
    }

    #[test]
    fn counts_and_percentages() {
        let agents = vec![
            agent(1, AgentStatus::Free, 1, 0),
            agent(2, AgentStatus::Free, 2, 4),
            agent(3, AgentStatus::Free, 1, 6),
            agent(4, AgentStatus::Declined, 0, 0),
            agent(5, AgentStatus::OnService, 2, 2),
            agent(6, AgentStatus::InQueue, 0, 1),
            agent(7, AgentStatus::None, 0, 0),
        ];
        let s = StatisticsSnapshot::collect(100, agents, handlers(2), 3);
        assert_eq!(s.arrived, 6);
        assert_eq!(s.processed, 3);
        assert_eq!(s.declined, 1);
        assert_eq!(s.max_queue_length, 3);
        assert_eq!(s.percent(), 50.0);
        assert_eq!(s.blocking_percent(), 50.0);
        assert!((s.decline_percent() - 100.0 / 6.0).abs() < 1e-9);
        assert_eq!(s.count_status(AgentStatus::InQueue), 1);
        // Waits of agents that reached a handler: 0, 4, 6, 2.
        assert_eq!(s.mean_queue_wait(), 3.0);

        assert_eq!(s.handlers.len(), 2);
        assert_eq!(s.handlers[0].id, HandlerId(1));
        assert_eq!(s.handlers[0].processed, 2);
        assert!((s.handlers[0].processed_percent - 200.0 / 3.0).abs() < 1e-9);
        // The on-service agent is not counted for handler 2.
        assert_eq!(s.handlers[1].processed, 1);
    }

    #[test]
    fn empty_run_is_all_zero() {
        let s = StatisticsSnapshot::collect(100, vec![], handlers(3), 0);
        assert_eq!(s.arrived, 0);
        assert_eq!(s.processed, 0);
        assert_eq!(s.percent(), 0.0);
        assert_eq!(s.blocking_percent(), 0.0);
        assert_eq!(s.decline_percent(), 0.0);
        assert_eq!(s.mean_queue_wait(), 0.0);
        assert_eq!(s.handlers.len(), 3);
        for h in &s.handlers {
            assert_eq!(h.processed, 0);
            assert_eq!(h.processed_percent, 0.0);
            assert!(!h.processed_percent.is_nan());
        }
    }

    #[test]
    fn arrived_but_none_processed_is_not_nan() {
        let agents = vec![agent(1, AgentStatus::Declined, 0, 0), agent(2, AgentStatus::InQueue, 0, 0)];
        let s = StatisticsSnapshot::collect(10, agents, handlers(1), 1);
        assert_eq!(s.percent(), 0.0);
        assert_eq!(s.blocking_percent(), 100.0);
        assert_eq!(s.handlers[0].processed_percent, 0.0);
    }
}
