//! Extraction engine.
//!
//! The engine is split into focused submodules under `src/engine/`:
//!
//! - `normalize.rs`: canonical line-oriented text form (`\r\n` → `\n`,
//!   tabs → spaces) plus shared line iteration.
//! - `segment.rs`: the two selectable section boundary strategies
//!   ([`Segmenter::Scan`] and [`Segmenter::Anchored`]).
//! - `extract.rs`: the rule-based pipeline that runs the field extractors and
//!   record parsers over segmented text and assembles one `Resume`.
//!
//! The public surface lives in `src/api.rs`; code outside the crate interacts
//! with the engine only through `extract` / `extract_with`.

#[path = "engine/extract.rs"]
pub(crate) mod extract;
#[path = "engine/normalize.rs"]
pub(crate) mod normalize;
#[path = "engine/segment.rs"]
pub(crate) mod segment;

pub use segment::Segmenter;
