use std::ops::RangeInclusive;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use appraise_types::{AuthenticityScore, ScoreRequest, ScoreResponse};

use crate::source::{ScoreSource, ThreadRngSource};

/// Keywords that push a description into the suspect band.
/// Matched case-insensitively, anywhere in the string.
pub const SUSPECT_KEYWORDS: [&str; 2] = ["replica", "copy"];

const GENUINE_BAND: RangeInclusive<u8> = 50..=99;
const SUSPECT_BAND: RangeInclusive<u8> = 10..=40;

/// The Authenticity Estimator.
///
/// Stateless across requests: each call is a keyword scan plus one draw from
/// the injected [`ScoreSource`]. Concurrent calls share nothing mutable.
pub struct Estimator<S = ThreadRngSource> {
    keywords: Option<AhoCorasick>,
    source: S,
}

impl<S> std::fmt::Debug for Estimator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Estimator")
            .field("keywords", &SUSPECT_KEYWORDS)
            .finish_non_exhaustive() // Omit automaton contents
    }
}

impl Estimator<ThreadRngSource> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(ThreadRngSource)
    }
}

impl Default for Estimator<ThreadRngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScoreSource> Estimator<S> {
    /// Builds an estimator drawing scores from `source`.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        let keywords = match AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(SUSPECT_KEYWORDS)
        {
            Ok(ac) => Some(ac),
            Err(e) => {
                tracing::warn!("keyword automaton build failed; using fallback scan ({e})");
                None
            }
        };
        Self { keywords, source }
    }

    /// Scores a parsed payload.
    ///
    /// Absent fields have already been tolerated by [`ScoreRequest`]'s
    /// accessors, so this never fails: a suspect description draws from
    /// `[10, 40]`, anything else from `[50, 99]`.
    pub fn estimate(&self, request: &ScoreRequest) -> ScoreResponse {
        let item_name = request.item_name();
        let band = if self.is_suspect(request.description()) {
            SUSPECT_BAND
        } else {
            GENUINE_BAND
        };

        // A conforming source cannot leave the band; clamp rather than trust it.
        let drawn = self.source.draw(band.clone()).clamp(*band.start(), *band.end());
        let score = AuthenticityScore::new(drawn).unwrap_or(AuthenticityScore::LOWEST);

        tracing::info!(item_name, score = score.get(), "estimated authenticity");

        ScoreResponse::new(item_name, score)
    }

    fn is_suspect(&self, description: &str) -> bool {
        if let Some(ac) = &self.keywords {
            return ac.is_match(description);
        }

        // Fallback scan, equivalent for these ASCII keywords.
        let lower = description.to_lowercase();
        SUSPECT_KEYWORDS.iter().any(|kw| lower.contains(kw))
    }
}
