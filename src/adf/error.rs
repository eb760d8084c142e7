use thiserror::Error;

/// The errors raised while building or querying a framework.
///
/// Fallible functions of this crate return [`anyhow::Result`]; the underlying errors are values of this type,
/// and can be retrieved with [`anyhow::Error::downcast_ref`].
/// Argument labels are stored as their displayed form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdfError {
    /// An argument is not part of the framework.
    #[error("no such argument: {0}")]
    NoSuchArgument(String),

    /// Two arguments are not linked.
    #[error("no link from {parent} to {child}")]
    NoSuchLink {
        /// the parent argument
        parent: String,
        /// the child argument
        child: String,
    },

    /// An acceptance condition depends on an argument that is not defined.
    #[error("{child} depends on {parent}, which is not an argument")]
    UndefinedDependency {
        /// the undefined argument
        parent: String,
        /// the argument whose acceptance condition refers to the undefined one
        child: String,
    },

    /// An explicit link targets an argument that is not defined by the builder.
    #[error("the link from {parent} to {child} targets an argument that is not defined by the builder")]
    UnknownLinkChild {
        /// the parent argument
        parent: String,
        /// the undefined child
        child: String,
    },

    /// An explicit link is not backed by the acceptance condition of its child.
    #[error("the acceptance condition of {child} does not depend on {parent}")]
    UnexpectedLink {
        /// the parent argument
        parent: String,
        /// the child argument
        child: String,
    },

    /// Two explicit links between the same arguments have different types.
    #[error("conflicting types are given for the link from {parent} to {child}")]
    ConflictingLinks {
        /// the parent argument
        parent: String,
        /// the child argument
        child: String,
    },

    /// Some links are neither provided nor computable since no strategy is set.
    #[error("no link strategy is set to compute {count} missing link(s): {links}")]
    MissingLinks {
        /// the number of missing links
        count: usize,
        /// the missing links, as a comma-separated list of `parent->child`
        links: String,
    },

    /// An argument to add to an extended framework is already defined by the framework it extends.
    #[error("argument {0} is already defined in the extended framework")]
    ArgumentAlreadyDefined(String),

    /// A resolution mode requiring a strategy was selected without strategy.
    #[error("the {0} resolution mode requires a link strategy")]
    MissingStrategy(String),
}
