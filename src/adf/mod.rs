//! Abstract Dialectical Frameworks: construction and queries.
//!
//! Frameworks are built by a [`Builder`], which produces [`GraphFramework`] objects,
//! or [`ExtendedFramework`] objects when new arguments are added to an existing framework.
//! [`EmptyFramework`] is the framework without argument.
//! All of them implement [`AbstractDialecticalFramework`], the read interface used by reasoners.

mod acceptance_condition;
pub use acceptance_condition::AcceptanceCondition;

mod builder;
pub use builder::Builder;
pub use builder::LinkResolution;
pub use builder::ResolutionMode;

mod empty_framework;
pub use empty_framework::empty;
pub use empty_framework::EmptyFramework;

mod error;
pub use error::AdfError;

mod extended_framework;
pub use extended_framework::ExtendedFramework;

mod framework;
pub use framework::AbstractDialecticalFramework;
pub use framework::LinkSet;
pub use framework::SharedFramework;

mod graph_framework;
pub use graph_framework::GraphFramework;

mod node_index;
pub use node_index::LinkState;
