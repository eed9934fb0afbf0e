//! The consistency and synchronization engine.
//!
//! Data flows one way: a [`Spec`](crate::models::Spec) goes in, issues and
//! statistics come out. Components that need the outside world take a
//! [`CommandExecutor`](crate::exec::CommandExecutor) argument.

pub mod details;
pub mod graph;
pub mod stats;
pub mod status;
pub mod sync;
pub mod tools;
pub mod validation;

pub use details::{acceptance_test_detail, feature_detail};
pub use graph::{has_circular_dependency, topological_sort_features};
pub use stats::calc_feature_stats;
pub use status::{perform_status_check, run_acceptance_tests};
pub use sync::check_sync_issues;
pub use tools::run_all_tools;
pub use validation::{find_duplicates, validate};
