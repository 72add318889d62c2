//! CLI command implementations.

mod catalog;
mod check;
mod common;
mod lookup;
mod resolve;
mod switch;

pub use catalog::{CatalogArgs, run_catalog};
pub use check::{CheckArgs, run_check};
pub use common::{Project, ProjectArgs};
pub use lookup::{LookupArgs, run_lookup};
pub use resolve::{ResolveArgs, run_resolve};
pub use switch::{SwitchArgs, run_switch};
