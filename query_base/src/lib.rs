//! Contains the building blocks shared by every phase of the query language tooling: source
//! positions and files, the [`expected::Expected`] container, and console logging.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod expected;
pub mod log;
pub mod source_file;
