//! Tool for running several policies over the same input.

use std::sync::mpsc::channel;
use std::time::Instant;

use serde::Serialize;
use threadpool::ThreadPool;

use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;
use crate::head::Direction;
use crate::input::SimulationConfig;
use crate::policies::common::validate_input;
use crate::policy::Policy;
use crate::request::RequestSet;
use crate::trace::Trace;

/// Contains result of one policy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyRun {
    /// Policy that produced the trace.
    pub policy: Policy,
    /// Initial direction the policy was given.
    pub direction: Direction,
    /// Resulting trace.
    pub trace: Trace,
}

impl PolicyRun {
    /// Shortcut for the total head movement of the run.
    pub fn total_movement(&self) -> u64 {
        self.trace.total_movement()
    }
}

/// Runs each of the selected policies on identical input.
pub struct Comparison {
    initial_position: Cylinder,
    requests: RequestSet,
    domain: DiskDomain,
    direction: Direction,
    policies: Vec<Policy>,
}

impl Comparison {
    /// Creates comparison of given policies.
    ///
    /// Returns [`SchedulingError::OutOfRangeRequest`] if the input doesn't fit the domain, so that no policy
    /// is run on an invalid input.
    pub fn new(
        initial_position: Cylinder,
        requests: RequestSet,
        domain: DiskDomain,
        direction: Direction,
        policies: Vec<Policy>,
    ) -> Result<Self, SchedulingError> {
        validate_input(initial_position, &requests, &domain)?;
        Ok(Self {
            initial_position,
            requests,
            domain,
            direction,
            policies,
        })
    }

    /// Creates comparison from a loaded config.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SchedulingError> {
        Self::new(
            config.initial_position,
            config.requests.clone(),
            config.domain()?,
            config.direction,
            config.policies.clone(),
        )
    }

    /// Returns the policies in reporting order.
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Runs policies one after another.
    pub fn run(&self) -> Result<Vec<PolicyRun>, SchedulingError> {
        let start_time = Instant::now();
        let runs = self
            .policies
            .iter()
            .map(|&policy| {
                policy
                    .schedule(self.initial_position, &self.requests, &self.domain, self.direction)
                    .map(|trace| PolicyRun {
                        policy,
                        direction: self.direction,
                        trace,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Finished {} runs in {:.2?}", runs.len(), start_time.elapsed());
        Ok(runs)
    }

    /// Runs each policy as a separate job using the specified number of threads.
    ///
    /// Every job gets its own copy of the request set. Results come in the same order as from [`run`](Self::run).
    pub fn run_parallel(&self, num_threads: usize) -> Result<Vec<PolicyRun>, SchedulingError> {
        let start_time = Instant::now();
        let num_threads = num_threads.max(1);
        let pool = ThreadPool::new(num_threads);
        let (sender, receiver) = channel();

        for (idx, &policy) in self.policies.iter().enumerate() {
            let sender = sender.clone();
            let initial_position = self.initial_position;
            let requests = self.requests.clone();
            let domain = self.domain;
            let direction = self.direction;
            pool.execute(move || {
                let result = policy
                    .schedule(initial_position, &requests, &domain, direction)
                    .map(|trace| PolicyRun {
                        policy,
                        direction,
                        trace,
                    });
                // the receiver outlives the pool
                sender.send((idx, result)).ok();
            });
        }
        drop(sender);
        pool.join();

        let mut results: Vec<_> = receiver.into_iter().collect();
        results.sort_by_key(|(idx, _)| *idx);
        let runs = results
            .into_iter()
            .map(|(_, result)| result)
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "Finished {} runs on {} threads in {:.2?}",
            runs.len(),
            num_threads,
            start_time.elapsed()
        );
        Ok(runs)
    }
}

/// Returns the run with minimal total movement, the earliest one on ties.
pub fn best(runs: &[PolicyRun]) -> Option<&PolicyRun> {
    runs.iter().min_by_key(|run| run.total_movement())
}
