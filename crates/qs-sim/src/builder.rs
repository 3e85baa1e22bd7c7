//! Fluent builder for constructing a [`Simulator`].

use qs_core::{GaussianSource, QueueConfig, RandomSource};

use crate::{SimResult, Simulator};

/// Fluent builder for [`Simulator`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.seed(s)`      | none                                     |
/// | `.source(src)`  | `GaussianSource::from_entropy()`         |
///
/// `.seed(s)` is shorthand for `.source(GaussianSource::new(s))`; whichever
/// is called last wins.
///
/// # Example
///
/// ```rust
/// use qs_core::QueueConfig;
/// use qs_sim::SimulatorBuilder;
///
/// let mut sim = SimulatorBuilder::new(QueueConfig::default()).seed(42).build()?;
/// let stats = sim.simulate(10_000);
/// assert!(stats.processed <= stats.arrived);
/// # Ok::<(), qs_sim::SimError>(())
/// ```
pub struct SimulatorBuilder {
    config: QueueConfig,
    source: Option<Box<dyn RandomSource>>,
}

impl SimulatorBuilder {
    pub fn new(config: QueueConfig) -> Self {
        Self { config, source: None }
    }

    /// Use the production Gaussian source with a fixed seed.
    pub fn seed(self, seed: u64) -> Self {
        self.source(GaussianSource::new(seed))
    }

    /// Inject any random source (e.g. a deterministic test stub).
    pub fn source<S: RandomSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Validate the configuration and return a ready-to-run [`Simulator`].
    pub fn build(self) -> SimResult<Simulator> {
        self.config.validate()?;
        let source = self
            .source
            .unwrap_or_else(|| Box::new(GaussianSource::from_entropy()));
        Ok(Simulator::new(self.config, source))
    }
}
