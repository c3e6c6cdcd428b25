use std::sync::Mutex;

use serde::Serialize;

/// Receives advisory messages from a search, such as "no ladder found".
///
/// Reporting never changes what the search returns.
pub trait DiagnosticSink {
    fn report(&self, context_a: &str, context_b: &str, message: &str);
}

/// A single reported message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub context_a: String,
    pub context_b: String,
    pub message: String,
}

/// Forwards diagnostics to the `log` facade at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, context_a: &str, context_b: &str, message: &str) {
        log::warn!("{} {}: {}", context_a, context_b, message);
    }
}

/// Drops every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _context_a: &str, _context_b: &str, _message: &str) {}
}

/// Keeps every diagnostic for later inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.entries
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, context_a: &str, context_b: &str, message: &str) {
        let diagnostic = Diagnostic {
            context_a: context_a.to_string(),
            context_b: context_b.to_string(),
            message: message.to_string(),
        };
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str, &str, &str),
{
    fn report(&self, context_a: &str, context_b: &str, message: &str) {
        self(context_a, context_b, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn poisoned_collecting_sink_keeps_its_entries() {
        let sink = CollectingSink::new();
        sink.report("hit", "cog", "no ladder found");

        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = sink.entries.lock().unwrap();
            panic!("poison the lock");
        }));
        assert!(sink.entries.is_poisoned());

        assert!(!sink.is_empty());
        assert_eq!(sink.diagnostics().len(), 1);
        sink.report("hit", "cig", "end word is not in the dictionary");
        assert_eq!(sink.into_diagnostics().len(), 2);
    }
}
