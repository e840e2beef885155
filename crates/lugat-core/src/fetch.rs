use lugat_client::DictionaryService;
use lugat_types::{AppEvent, Generation};
use tokio_util::sync::CancellationToken;

/// One issued lookup
#[derive(Debug, Clone)]
pub struct LookupTicket {
    pub generation: Generation,
    pub term: String,
    pub cancel: CancellationToken,
}

/// Hands out lookup tickets and decides which completion is current
#[derive(Debug)]
pub struct FetchCoordinator {
    root: CancellationToken,
    generation: Generation,
    in_flight: Option<CancellationToken>,
}

impl FetchCoordinator {
    pub fn new(root: CancellationToken) -> Self {
        Self {
            root,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a lookup for `term`, cancelling the one still running
    pub fn begin(&mut self, term: String) -> LookupTicket {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!("Cancelling superseded lookup {}", self.generation);
            previous.cancel();
        }

        self.generation += 1;
        let cancel = self.root.child_token();
        self.in_flight = Some(cancel.clone());

        LookupTicket {
            generation: self.generation,
            term,
            cancel,
        }
    }

    /// Accept a completion if it belongs to the newest lookup
    pub fn finish(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Dropping stale lookup result {} (current {})",
                generation,
                self.generation
            );
            return false;
        }
        self.in_flight = None;
        true
    }
}

impl Default for FetchCoordinator {
    fn default() -> Self {
        Self::new(CancellationToken::new())
    }
}

/// Perform the request for a ticket. Returns `None` when the ticket was
/// cancelled before the service answered.
pub async fn run_lookup<S>(service: &S, ticket: LookupTicket) -> Option<AppEvent>
where
    S: DictionaryService + ?Sized,
{
    let LookupTicket {
        generation,
        term,
        cancel,
    } = ticket;

    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("Lookup {} for '{}' cancelled", generation, term);
            None
        }
        result = service.lookup(&term) => {
            if let Err(e) = &result {
                tracing::warn!("Lookup for '{}' failed: {}", term, e);
            }
            Some(AppEvent::LookupFinished {
                generation,
                result: result.map_err(|e| e.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lugat_client::LookupError;
    use lugat_types::{Entry, LookupOutcome};
    use tokio::time::timeout;

    use super::*;

    struct FakeService;

    #[async_trait::async_trait]
    impl DictionaryService for FakeService {
        async fn lookup(&self, term: &str) -> Result<LookupOutcome, LookupError> {
            if term == "slow" {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
            if term == "broken" {
                let err = serde_parse_error();
                return Err(LookupError::Parse(err));
            }
            Ok(LookupOutcome::Found(vec![Entry {
                word: term.to_string(),
                phonetic: None,
                phonetics: vec![],
                meanings: vec![],
            }]))
        }
    }

    fn serde_parse_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn newer_ticket_cancels_previous() {
        let mut fetch = FetchCoordinator::default();
        let first = fetch.begin("a".into());
        let second = fetch.begin("b".into());

        assert!(first.cancel.is_cancelled());
        assert!(!second.cancel.is_cancelled());
        assert!(second.generation > first.generation);
    }

    #[test]
    fn only_current_generation_is_accepted() {
        let mut fetch = FetchCoordinator::default();
        let first = fetch.begin("a".into());
        let second = fetch.begin("b".into());

        assert!(!fetch.finish(first.generation));
        assert!(fetch.in_flight());
        assert!(fetch.finish(second.generation));
        assert!(!fetch.in_flight());
    }

    #[test]
    fn root_cancellation_reaches_tickets() {
        let root = CancellationToken::new();
        let mut fetch = FetchCoordinator::new(root.clone());
        let ticket = fetch.begin("a".into());
        root.cancel();
        assert!(ticket.cancel.is_cancelled());
    }

    #[tokio::test]
    async fn run_lookup_reports_generation() {
        let mut fetch = FetchCoordinator::default();
        let ticket = fetch.begin("keyboard".into());

        match run_lookup(&FakeService, ticket).await {
            Some(AppEvent::LookupFinished { generation, result }) => {
                assert_eq!(generation, 1);
                let Ok(LookupOutcome::Found(entries)) = result else {
                    panic!("expected entries");
                };
                assert_eq!(entries[0].word, "keyboard");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn run_lookup_folds_errors_into_message() {
        let mut fetch = FetchCoordinator::default();
        let ticket = fetch.begin("broken".into());

        match run_lookup(&FakeService, ticket).await {
            Some(AppEvent::LookupFinished { result: Err(message), .. }) => {
                assert!(message.starts_with("Failed to parse response"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn superseded_lookup_resolves_to_nothing() {
        let mut fetch = FetchCoordinator::default();
        let slow = fetch.begin("slow".into());
        let handle = tokio::spawn(async move { run_lookup(&FakeService, slow).await });

        fetch.begin("fast".into());

        let result = timeout(Duration::from_secs(2), handle).await;
        match result {
            Ok(Ok(None)) => {}
            Ok(Ok(Some(event))) => panic!("superseded lookup produced {:?}", event),
            Ok(Err(e)) => panic!("task failed: {}", e),
            Err(_) => panic!("Timeout - cancellation never observed"),
        }
    }
}
