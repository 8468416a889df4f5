use std::collections::BTreeMap;
use std::fmt;

use crate::transport::Verdict;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStats {
    pub success: u64,
    pub failure: u64,
    pub failure_messages: Vec<String>,
}

/// Per-request-name outcome counts for runs outside goose.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    requests: BTreeMap<&'static str, RequestStats>,
}

impl RunStats {
    pub fn record(&mut self, name: &'static str, verdict: &Verdict) {
        let entry = self.requests.entry(name).or_default();
        match verdict {
            Verdict::Success => entry.success += 1,
            Verdict::Failure(message) => {
                entry.failure += 1;
                entry.failure_messages.push(message.clone());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RequestStats> {
        self.requests.get(name)
    }

    pub fn total_requests(&self) -> u64 {
        self.requests.values().map(|s| s.success + s.failure).sum()
    }

    pub fn total_failures(&self) -> u64 {
        self.requests.values().map(|s| s.failure).sum()
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16} {:>8} {:>8}", "Name", "# ok", "# fails")?;
        for (name, stats) in &self.requests {
            writeln!(f, "{:<16} {:>8} {:>8}", name, stats.success, stats.failure)?;
            for message in &stats.failure_messages {
                writeln!(f, "  - {message}")?;
            }
        }
        write!(
            f,
            "{:<16} {:>8} {:>8}",
            "Aggregated",
            self.total_requests() - self.total_failures(),
            self.total_failures()
        )
    }
}
