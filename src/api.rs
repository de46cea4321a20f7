//! Public extraction API.
//!
//! The whole crate is driven through two functions: [`extract`] (defaults)
//! and [`extract_with`] (explicit [`Context`] and [`Options`]). Both return an
//! [`Outcome`] and never fail past their own boundary: absence of a field is
//! an empty value plus an advisory `missing` entry, and any internal fault is
//! downgraded to `Outcome { details: None, missing: [diagnostic] }`.
//!
//! Extraction strategies are interchangeable behind the same contract and are
//! selected through [`Strategy`]; the rule-based path is the one implemented
//! here. NER-assisted mode is the rule-based path with organization hints
//! from a caller-supplied [`EntityTagger`], and the remote-model strategy is
//! a recognized discriminator whose backend lives outside this crate.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::{Catalog, DefaultCatalog};
use crate::engine::Segmenter;
use crate::engine::extract::{missing_fields, run_rule_based};
use crate::schema::Resume;

/// Named-entity backend for NER-assisted extraction.
///
/// Implementations return organization names detected in the document; the
/// record parsers use them to corroborate education/experience boundaries
/// that the capitalization heuristics alone would miss. The crate ships no
/// model — this is the seam a neural backend plugs into.
pub trait EntityTagger: Send + Sync {
    /// Organization names detected in `text`.
    fn organizations(&self, text: &str) -> Vec<String>;
}

/// Extraction environment: the keyword catalogue to parse with and an
/// optional entity tagger for NER-assisted mode.
#[derive(Clone)]
pub struct Context {
    pub catalog: Arc<dyn Catalog>,
    pub tagger: Option<Arc<dyn EntityTagger>>,
}

impl Default for Context {
    fn default() -> Self {
        Self { catalog: Arc::new(DefaultCatalog), tagger: None }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("catalog", &"<catalog>").field("tagger", &self.tagger.is_some()).finish()
    }
}

/// Extraction strategy discriminator. All strategies honor the same
/// [`Outcome`] contract; callers pick one based on observed quality, and a
/// failed extraction is never retried (same input, same result) — the only
/// recourse is a different strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Deterministic pattern-based extraction (this crate).
    #[default]
    RuleBased,
    /// Rule-based extraction with organization hints from an [`EntityTagger`].
    /// Degrades to pure rule-based when no tagger is supplied.
    NerAssisted,
    /// Extraction delegated to a remote language model. Recognized on the
    /// wire, but the backend is not part of this crate.
    RemoteModel,
}

/// Options that affect extraction behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub strategy: Strategy,
    pub segmenter: Segmenter,
}

/// Faults that the [`extract_with`] boundary downgrades to a failure
/// [`Outcome`]. Exposed for callers of [`try_extract_with`] that want the
/// typed error instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// An extractor violated an internal invariant (panicked). Deterministic:
    /// the same input fails the same way every time.
    #[error("resume extraction failed: {0}")]
    Internal(String),
    /// The selected strategy needs an external backend that is not wired in.
    #[error("strategy `{0:?}` requires an external backend")]
    UnsupportedStrategy(Strategy),
}

/// Result of one extraction call: a fully-shaped [`Resume`] (or `None` on
/// unrecoverable failure) plus an advisory list of required fields that could
/// not be located.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub details: Option<Resume>,
    pub missing: Vec<String>,
}

impl Outcome {
    /// The failure shape: no details, one diagnostic message.
    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self { details: None, missing: vec![diagnostic.into()] }
    }
}

/// Extract a structured resume from `text` using the rule-based strategy and
/// a default [`Context`].
///
/// # Example
/// ```
/// use vitae::extract;
///
/// let out = extract("Jane Doe\njane@doe.com");
/// assert_eq!(out.details.unwrap().basics.name, "Jane Doe");
/// ```
pub fn extract(text: &str) -> Outcome {
    extract_with(text, &Context::default(), &Options::default())
}

/// Extract a structured resume from `text` with the provided
/// `context`/`options`.
///
/// Never panics and never returns an error: every fault is downgraded to the
/// failure [`Outcome`] shape at this boundary.
pub fn extract_with(text: &str, context: &Context, options: &Options) -> Outcome {
    match try_extract_with(text, context, options) {
        Ok(resume) => {
            let missing = missing_fields(&resume);
            Outcome { details: Some(resume), missing }
        }
        Err(err) => {
            warn!(%err, "extraction downgraded to failure outcome");
            Outcome::failure(err.to_string())
        }
    }
}

/// Like [`extract_with`], but surfaces the typed [`ExtractError`] instead of
/// folding it into the outcome shape.
pub fn try_extract_with(text: &str, context: &Context, options: &Options) -> Result<Resume, ExtractError> {
    debug!(strategy = ?options.strategy, segmenter = ?options.segmenter, len = text.len(), "extract");

    let organizations = match options.strategy {
        Strategy::RuleBased => Vec::new(),
        Strategy::NerAssisted => match &context.tagger {
            Some(tagger) => guarded(|| tagger.organizations(text))?,
            None => Vec::new(),
        },
        Strategy::RemoteModel => return Err(ExtractError::UnsupportedStrategy(Strategy::RemoteModel)),
    };

    guarded(|| run_rule_based(text, context, options.segmenter, &organizations))
}

/// Run `f`, downgrading a panic to [`ExtractError::Internal`]. The pipeline
/// itself is total; this guard exists so a misbehaving custom catalogue or
/// tagger cannot unwind past the API boundary.
fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, ExtractError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "internal error".to_string());
        ExtractError::Internal(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Resume fixture: minimal but complete.
    const MINIMAL_RESUME: &str =
        "Jane Doe\njane@doe.com\n555-123-4567\n\nEDUCATION\nBoston University\nBachelor of Science\n2018-2022\nGPA: 3.75\n\nSKILLS\nPython, Docker";

    // Resume fixture: a lone projects section, no contact info.
    const PROJECTS_ONLY: &str = "PROJECTS\nChess Engine\n• Implemented alpha-beta pruning with transposition tables";

    struct PanickingTagger;

    impl EntityTagger for PanickingTagger {
        fn organizations(&self, _text: &str) -> Vec<String> {
            panic!("tagger backend unavailable")
        }
    }

    struct FixedTagger(Vec<String>);

    impl EntityTagger for FixedTagger {
        fn organizations(&self, _text: &str) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn minimal_resume_scenario() {
        let out = extract(MINIMAL_RESUME);
        let resume = out.details.expect("details must be present");
        assert_eq!(resume.basics.name, "Jane Doe");
        assert_eq!(resume.basics.email, "jane@doe.com");
        assert_eq!(resume.education.len(), 1);
        assert!(resume.education[0].school.contains("Boston University"));
        assert!((resume.education[0].gpa - 3.75).abs() < 1e-9);
        assert!(resume.skills.programming_languages.contains(&"Python".to_string()));
        assert!(resume.skills.devops_tools.contains(&"Docker".to_string()));
        assert!(out.missing.is_empty());
    }

    #[test]
    fn no_contact_info_scenario() {
        let out = extract(PROJECTS_ONLY);
        let resume = out.details.expect("partial extraction is not a failure");
        assert_eq!(resume.basics.email, "");
        assert!(out.missing.iter().any(|m| m.contains("Email")), "missing: {:?}", out.missing);
        assert_eq!(resume.projects.len(), 1);
        assert!(!resume.projects[0].highlights.is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let a = serde_json::to_string(&extract(MINIMAL_RESUME)).unwrap();
        let b = serde_json::to_string(&extract(MINIMAL_RESUME)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_input_yields_shaped_details_and_full_missing_list() {
        let out = extract("");
        let resume = out.details.expect("empty input is not a fault");
        assert_eq!(resume, Resume::default());
        assert_eq!(
            out.missing,
            vec!["Name not found".to_string(), "Email not found".to_string(), "Education not found".to_string()]
        );
    }

    #[test]
    fn internal_fault_is_downgraded_to_failure_outcome() {
        let context = Context { tagger: Some(Arc::new(PanickingTagger)), ..Default::default() };
        let options = Options { strategy: Strategy::NerAssisted, ..Default::default() };

        let out = extract_with(MINIMAL_RESUME, &context, &options);
        assert_eq!(out.details, None);
        assert_eq!(out.missing.len(), 1);
        assert!(out.missing[0].contains("tagger backend unavailable"), "diagnostic: {:?}", out.missing);
    }

    #[test]
    fn remote_model_strategy_reports_unsupported_backend() {
        let options = Options { strategy: Strategy::RemoteModel, ..Default::default() };
        let out = extract_with(MINIMAL_RESUME, &Context::default(), &options);
        assert_eq!(out.details, None);
        assert!(out.missing[0].contains("external backend"));

        let err = try_extract_with(MINIMAL_RESUME, &Context::default(), &options).unwrap_err();
        assert_eq!(err, ExtractError::UnsupportedStrategy(Strategy::RemoteModel));
    }

    #[test]
    fn ner_assisted_without_tagger_matches_rule_based() {
        let options = Options { strategy: Strategy::NerAssisted, ..Default::default() };
        let assisted = extract_with(MINIMAL_RESUME, &Context::default(), &options);
        let plain = extract(MINIMAL_RESUME);
        assert_eq!(assisted, plain);
    }

    #[test]
    fn ner_assisted_tagger_adds_record_boundaries() {
        let text = "jane@doe.com\n\nEXPERIENCE\ninitech, remote\n• Shipped the TPS reporting overhaul this year";
        let context = Context { tagger: Some(Arc::new(FixedTagger(vec!["Initech".into()]))), ..Default::default() };
        let options = Options { strategy: Strategy::NerAssisted, ..Default::default() };

        let assisted = extract_with(text, &context, &options).details.unwrap();
        assert_eq!(assisted.experience.len(), 1);
        assert_eq!(assisted.experience[0].company, "initech, remote");

        let plain = extract(text).details.unwrap();
        assert!(plain.experience.is_empty(), "lowercase company is invisible without the tagger");
    }

    #[test]
    fn strategy_discriminator_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Strategy::RuleBased).unwrap(), r#""rule_based""#);
        assert_eq!(serde_json::to_string(&Strategy::NerAssisted).unwrap(), r#""ner_assisted""#);
        assert_eq!(serde_json::from_str::<Strategy>(r#""remote_model""#).unwrap(), Strategy::RemoteModel);
    }

    #[test]
    fn outcome_wire_shape_is_stable() {
        let out = extract(MINIMAL_RESUME);
        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("details").is_some());
        assert!(json.get("missing").unwrap().as_array().is_some());

        let failure = serde_json::to_value(Outcome::failure("boom")).unwrap();
        assert!(failure.get("details").unwrap().is_null());
        assert_eq!(failure.get("missing").unwrap().as_array().unwrap().len(), 1);
    }

    #[test]
    fn anchored_segmenter_is_selectable() {
        let text = "Jane Doe\n\nEducation\nBoston University\nBachelor of Science\n2018-2022\n\nTECHNICAL SKILLS\nRust, PostgreSQL\n";
        let options = Options { segmenter: Segmenter::Anchored, ..Default::default() };
        let resume = extract_with(text, &Context::default(), &options).details.unwrap();
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].school, "Boston University");
        assert!(resume.skills.programming_languages.contains(&"Rust".to_string()));
    }
}
