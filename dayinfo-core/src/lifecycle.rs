use tracing::{debug, warn};

use crate::{
    client::DayInfoSource,
    error::{ErrorKind, SubmitError},
    model::{DayInfoQuery, DayInfoResponse},
    query,
};

/// The single piece of shared state driving the view.
///
/// Replaced wholesale on every transition; renderers only ever borrow it.
#[derive(Debug, Default)]
pub enum RequestOutcome {
    #[default]
    Idle,
    Loading,
    Success(DayInfoResponse),
    Failure {
        kind: ErrorKind,
        message: &'static str,
    },
}

impl RequestOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestOutcome::Loading)
    }
}

/// Owns the request state machine: Idle → Loading → Success/Failure → … .
///
/// Each submission is stamped with a generation; a resolution carrying a
/// stale stamp is discarded instead of clobbering a newer request's state.
/// In-flight requests are never cancelled.
#[derive(Debug)]
pub struct RequestLifecycleController {
    source: Box<dyn DayInfoSource>,
    outcome: RequestOutcome,
    generation: u64,
}

impl RequestLifecycleController {
    pub fn new(source: Box<dyn DayInfoSource>) -> Self {
        Self {
            source,
            outcome: RequestOutcome::Idle,
            generation: 0,
        }
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        self.outcome.is_loading()
    }

    /// Validate the raw form inputs and run one full submission.
    ///
    /// Rejected outright, with no state change, while a request is in flight
    /// or when validation fails — no network call is made in either case.
    /// Holding `&mut self` across the await keeps a second concurrent
    /// submission unrepresentable through this path.
    pub async fn submit(
        &mut self,
        raw_date: &str,
        raw_city: &str,
    ) -> Result<&RequestOutcome, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::Busy);
        }

        let query = query::build(raw_date, raw_city)?;

        let generation = self.begin(&query)?;
        let result = self.source.fetch(&query).await;
        self.finish(generation, result);

        Ok(&self.outcome)
    }

    /// Enter `Loading`, clearing previously displayed data and error, and
    /// stamp the submission. Fails with `Busy` while another request is in
    /// flight.
    pub fn begin(&mut self, query: &DayInfoQuery) -> Result<u64, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::Busy);
        }

        self.generation += 1;
        self.outcome = RequestOutcome::Loading;
        debug!(
            date = %query.date,
            city = %query.city,
            generation = self.generation,
            "day-info request started"
        );

        Ok(self.generation)
    }

    /// Resolve the submission stamped `generation`. A stale stamp, or a
    /// resolution arriving when nothing is loading, is dropped without
    /// touching the current outcome.
    pub fn finish(&mut self, generation: u64, result: Result<DayInfoResponse, ErrorKind>) {
        if generation != self.generation || !self.is_loading() {
            debug!(
                stale = generation,
                current = self.generation,
                "discarding stale day-info resolution"
            );
            return;
        }

        self.outcome = match result {
            Ok(response) => RequestOutcome::Success(response),
            Err(kind) => {
                warn!(error = %kind, "day-info request failed");
                let message = kind.user_message();
                RequestOutcome::Failure { kind, message }
            }
        };
    }
}
