//! Independent replications of one configuration.
//!
//! Each seed gets its own [`Simulator`][crate::Simulator] and Gaussian
//! source, so runs share no state.  With the `parallel` feature the runs go
//! through Rayon; results come back in seed order either way, identical to a
//! sequential run.

use qs_core::QueueConfig;
use qs_stats::StatisticsSnapshot;

use crate::{SimResult, SimulatorBuilder};

/// Run `config` for `duration` ticks once per seed.
pub fn run_replications(
    config:   &QueueConfig,
    duration: u64,
    seeds:    &[u64],
) -> SimResult<Vec<StatisticsSnapshot>> {
    config.validate()?;

    let run = |&seed: &u64| -> SimResult<StatisticsSnapshot> {
        let mut sim = SimulatorBuilder::new(config.clone()).seed(seed).build()?;
        Ok(sim.simulate(duration))
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(run).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        seeds.par_iter().map(run).collect()
    }
}
