//! Data consumed by the demo tour and the mock backend.
//!
//! [`guide`] holds the step and hint shapes whose text may be localized per
//! locale. [`fixtures`] generates the database instances a demo session starts
//! with.

pub mod fixtures;
pub mod guide;

pub use fixtures::{DataSource, DataSourceType, Database, FixtureStore, Instance};
pub use guide::{
    DialogPosition, GuideData, HintData, HintDialog, HintType, LocalizedText, StepData, StepType,
};
