//! Ranking of per-schema outcomes: keeps the single most actionable error.

use super::ParamsIssue;

/// How far a params object got against one candidate schema.
///
/// Ordered worst to best, so `Ord` ranks outcomes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CandidateRank {
    DecodeFailed,
    DecodedMissingKeys,
    Valid,
}

/// Result of evaluating params against one candidate schema.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateOutcome {
    DecodeFailed(ParamsIssue),
    DecodedMissingKeys(ParamsIssue),
    Valid,
}

impl CandidateOutcome {
    pub fn rank(&self) -> CandidateRank {
        match self {
            CandidateOutcome::DecodeFailed(_) => CandidateRank::DecodeFailed,
            CandidateOutcome::DecodedMissingKeys(_) => CandidateRank::DecodedMissingKeys,
            CandidateOutcome::Valid => CandidateRank::Valid,
        }
    }

    pub fn issue(&self) -> Option<&ParamsIssue> {
        match self {
            CandidateOutcome::DecodeFailed(issue) | CandidateOutcome::DecodedMissingKeys(issue) => {
                Some(issue)
            }
            CandidateOutcome::Valid => None,
        }
    }
}

/// Accumulates candidate outcomes for one validation call.
///
/// A strictly better rank replaces the current winner. On a tie the first
/// outcome considered is kept, so registration order decides.
#[derive(Debug, Default)]
pub struct ValidationCandidate {
    winner: Option<CandidateOutcome>,
}

impl ValidationCandidate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consider(&mut self, outcome: CandidateOutcome) {
        let replace = match &self.winner {
            None => true,
            Some(current) => outcome.rank() > current.rank(),
        };
        if replace {
            self.winner = Some(outcome);
        }
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn rank(&self) -> Option<CandidateRank> {
        self.winner.as_ref().map(CandidateOutcome::rank)
    }

    pub fn message(&self) -> Option<&str> {
        self.winner
            .as_ref()
            .and_then(CandidateOutcome::issue)
            .map(|issue| issue.message.as_str())
    }

    /// The retained error, or `None` when nothing was considered or a candidate was valid.
    pub fn into_issue(self) -> Option<ParamsIssue> {
        match self.winner {
            Some(CandidateOutcome::DecodeFailed(issue))
            | Some(CandidateOutcome::DecodedMissingKeys(issue)) => Some(issue),
            Some(CandidateOutcome::Valid) | None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::IssueKind;

    fn failed(message: &str) -> CandidateOutcome {
        CandidateOutcome::DecodeFailed(ParamsIssue::new(IssueKind::TypeMismatch, message))
    }

    fn missing(message: &str) -> CandidateOutcome {
        CandidateOutcome::DecodedMissingKeys(ParamsIssue::new(IssueKind::MissingRequiredKey, message))
    }

    #[test]
    fn rank_order() {
        assert!(CandidateRank::Valid > CandidateRank::DecodedMissingKeys);
        assert!(CandidateRank::DecodedMissingKeys > CandidateRank::DecodeFailed);
    }

    #[test]
    fn empty_candidate_has_no_winner() {
        let candidate = ValidationCandidate::new();
        assert!(!candidate.has_winner());
        assert_eq!(candidate.message(), None);
        assert_eq!(candidate.into_issue(), None);
    }

    #[test]
    fn decoded_missing_keys_beats_decode_failure() {
        let mut candidate = ValidationCandidate::new();
        candidate.consider(failed("bad type"));
        candidate.consider(missing("missing required params keys: query"));
        assert_eq!(candidate.message(), Some("missing required params keys: query"));
    }

    #[test]
    fn decode_failure_never_replaces_decoded_missing_keys() {
        let mut candidate = ValidationCandidate::new();
        candidate.consider(missing("missing required params keys: query"));
        candidate.consider(failed("bad type"));
        assert_eq!(candidate.rank(), Some(CandidateRank::DecodedMissingKeys));
        assert_eq!(candidate.message(), Some("missing required params keys: query"));
    }

    #[test]
    fn first_registered_wins_a_tie() {
        let mut candidate = ValidationCandidate::new();
        candidate.consider(missing("missing required params keys: a"));
        candidate.consider(missing("missing required params keys: b"));
        assert_eq!(candidate.message(), Some("missing required params keys: a"));

        let mut candidate = ValidationCandidate::new();
        candidate.consider(failed("first"));
        candidate.consider(failed("second"));
        assert_eq!(candidate.message(), Some("first"));
    }

    #[test]
    fn valid_clears_the_error() {
        let mut candidate = ValidationCandidate::new();
        candidate.consider(failed("bad type"));
        candidate.consider(CandidateOutcome::Valid);
        candidate.consider(missing("missing required params keys: a"));
        assert_eq!(candidate.rank(), Some(CandidateRank::Valid));
        assert_eq!(candidate.into_issue(), None);
    }
}
