// Error reporting contract
// The capability interface components implement to be told about failures

use crate::types::RexxarError;

/// The originating object on whose behalf an error is being communicated.
///
/// Handlers use the reporter for context and logging only, never for control
/// flow. The reference is non-owning; the handler must not retain it.
pub trait Reporter: Send + Sync {
    fn reporter_name(&self) -> &str;
}

impl Reporter for str {
    fn reporter_name(&self) -> &str {
        self
    }
}

impl Reporter for &str {
    fn reporter_name(&self) -> &str {
        self
    }
}

/// Notification sink for errors raised anywhere in the container.
///
/// Both arguments are optional and borrowed. Invocations may arrive from any
/// thread in any order; each one is independent. An implementation must not
/// block the caller and must not propagate its own failures back out of
/// [`handle_error`](ErrorHandler::handle_error).
pub trait ErrorHandler: Send + Sync {
    fn handle_error(&self, error: Option<&RexxarError>, reporter: Option<&dyn Reporter>);
}

/// Default handler that emits a structured `tracing` event per notification.
#[derive(Debug, Default)]
pub struct TracingErrorHandler;

impl TracingErrorHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorHandler for TracingErrorHandler {
    fn handle_error(&self, error: Option<&RexxarError>, reporter: Option<&dyn Reporter>) {
        let reporter_name = reporter.map_or("unknown", Reporter::reporter_name);
        match error {
            Some(err) => {
                tracing::error!(
                    error_id = %err.error_id,
                    domain = %err.domain,
                    code = err.code,
                    url = err.url().unwrap_or_default(),
                    reporter = reporter_name,
                    "{}",
                    err.message
                );
            }
            None => {
                tracing::error!(reporter = reporter_name, "error reported without details");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        seen: AtomicUsize,
        not_found: AtomicUsize,
    }

    impl CountingHandler {
        fn new() -> Self {
            Self {
                seen: AtomicUsize::new(0),
                not_found: AtomicUsize::new(0),
            }
        }
    }

    impl ErrorHandler for CountingHandler {
        fn handle_error(&self, error: Option<&RexxarError>, _reporter: Option<&dyn Reporter>) {
            self.seen.fetch_add(1, Ordering::SeqCst);
            if error.is_some_and(RexxarError::is_http_not_found) {
                self.not_found.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_handler_accepts_absent_arguments() {
        let handler = CountingHandler::new();
        handler.handle_error(None, None);
        assert_eq!(handler.seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_accepts_populated_arguments() {
        let handler = CountingHandler::new();
        let err = RexxarError::http_not_found("https://example.com/x");
        handler.handle_error(Some(&err), Some(&"resource_loader"));
        assert_eq!(handler.seen.load(Ordering::SeqCst), 1);
        assert_eq!(handler.not_found.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_invocable_from_any_thread() {
        let handler = CountingHandler::new();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let err = RexxarError::http_not_found("https://example.com/x");
                    handler.handle_error(Some(&err), Some(&"worker"));
                });
            }
        });
        assert_eq!(handler.seen.load(Ordering::SeqCst), 8);
        assert_eq!(handler.not_found.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn test_tracing_handler_never_fails() {
        let handler = TracingErrorHandler::new();
        handler.handle_error(None, None);
        let err = RexxarError::http_not_found("https://example.com/x");
        handler.handle_error(Some(&err), Some(&"resource_loader"));
    }

    #[test]
    fn test_str_reporter_name() {
        let reporter: &dyn Reporter = &"route_widget";
        assert_eq!(reporter.reporter_name(), "route_widget");
    }
}
