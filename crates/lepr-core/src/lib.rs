//! lepr-core - extraction and validation of LEPR chemistry uploads.
//!
//! The pipeline is consumed in sequence: a [`Workbook`](lepr_grid::Workbook)
//! goes through [`extract::extract_chem_data`] to produce a run × species
//! value matrix plus its method/unit metadata strip, and
//! [`validate::validate_workbook`] runs the rule batteries over both,
//! collecting findings into a run-scoped [`findings::FindingLog`].

pub mod coords;
pub mod error;
pub mod extract;
pub mod findings;
pub mod layout;
pub mod storage;
pub mod validate;

pub use error::{LeprError, Result};
pub use extract::{ChemMatrix, MetadataStrip, extract_chem_data};
pub use findings::{Finding, FindingLog, Severity};
pub use layout::SheetLayout;
pub use validate::validate_workbook;
