//! Scalar field extractors.
//!
//! Pure `text -> value` functions, each independent of the others and of
//! section boundaries. All of them encode absence in the return value (empty
//! string, zero, empty range) and never fail:
//!
//! - `contact.rs`: email, phone, name, linkedin/github/portfolio links,
//!   location.
//! - `gpa.rs`: GPA with scale re-normalization to 4.0.
//! - `dates.rs`: `Month YYYY — Month YYYY | Present` style ranges.

#[path = "fields/contact.rs"]
mod contact;
#[path = "fields/dates.rs"]
mod dates;
#[path = "fields/gpa.rs"]
mod gpa;

pub use contact::{
    extract_email, extract_github, extract_linkedin, extract_location, extract_name, extract_phone, extract_portfolio,
};
pub use dates::{DateRange, extract_date_range};
pub use gpa::extract_gpa;
