use super::{
    node_index::NodeIndex, AbstractDialecticalFramework, AcceptanceCondition, AdfError,
    ExtendedFramework, GraphFramework, SharedFramework,
};
use crate::{
    link::{Link, LinkStrategy, LinkType},
    utils::LabelType,
};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::{
    collections::{hash_map::Entry, HashMap, HashSet},
    fmt::Debug,
    sync::Arc,
};
use strum_macros::{Display, EnumIter, EnumString};

/// The way the links that are not explicitly given to a [`Builder`] are obtained.
pub enum LinkResolution<T, C, L>
where
    L: LinkType,
{
    /// All the links are computed by the strategy when the framework is built.
    Eager(Arc<dyn LinkStrategy<T, C, L>>),
    /// Each link is computed by the strategy the first time it is queried.
    Lazy(Arc<dyn LinkStrategy<T, C, L>>),
    /// No strategy: all the links must be given explicitly.
    Provided,
}

impl<T, C, L> LinkResolution<T, C, L>
where
    L: LinkType,
{
    /// Returns the mode of this resolution policy.
    pub fn mode(&self) -> ResolutionMode {
        match self {
            LinkResolution::Eager(_) => ResolutionMode::Eager,
            LinkResolution::Lazy(_) => ResolutionMode::Lazy,
            LinkResolution::Provided => ResolutionMode::Provided,
        }
    }
}

impl<T, C, L> Default for LinkResolution<T, C, L>
where
    L: LinkType,
{
    fn default() -> Self {
        LinkResolution::Provided
    }
}

impl<T, C, L> Clone for LinkResolution<T, C, L>
where
    L: LinkType,
{
    fn clone(&self) -> Self {
        match self {
            LinkResolution::Eager(s) => LinkResolution::Eager(Arc::clone(s)),
            LinkResolution::Lazy(s) => LinkResolution::Lazy(Arc::clone(s)),
            LinkResolution::Provided => LinkResolution::Provided,
        }
    }
}

impl<T, C, L> Debug for LinkResolution<T, C, L>
where
    L: LinkType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mode())
    }
}

/// The name of a link resolution mode.
///
/// Modes are displayed and parsed in lowercase, allowing them to be read from textual settings.
///
/// # Example
///
/// ```
/// # use crustadf::adf::ResolutionMode;
/// assert_eq!(ResolutionMode::Lazy, "lazy".parse().unwrap());
/// assert_eq!("provided", ResolutionMode::Provided.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ResolutionMode {
    /// See [`LinkResolution::Eager`].
    Eager,
    /// See [`LinkResolution::Lazy`].
    Lazy,
    /// See [`LinkResolution::Provided`].
    Provided,
}

/// A staging object for Abstract Dialectical Frameworks.
///
/// A builder collects arguments with their acceptance conditions and explicitly given links.
/// The links that are required by the acceptance conditions but not given are computed by a [`LinkStrategy`],
/// either when the framework is built ([`eager`](Builder::eager)) or when the links are queried ([`lazy`](Builder::lazy)).
/// With [`provided`](Builder::provided) (the default), no strategy is used and building fails if a link is missing.
/// Both eager and lazy modes produce the same links.
///
/// Builders are not meant to be shared between threads.
///
/// # Example
///
/// ```
/// # use crustadf::adf::{AbstractDialecticalFramework, Builder};
/// # use crustadf::link::{ConstantLinkStrategy, LinkKind};
/// let mut builder = Builder::new();
/// builder
///     .add_argument("a", vec![])
///     .add_argument("b", vec!["a"])
///     .add_argument("c", vec!["a", "b"])
///     .eager(ConstantLinkStrategy::new(LinkKind::Supporting));
/// let adf = builder.build().unwrap();
/// assert_eq!(3, adf.size());
/// assert_eq!(3, adf.links().len());
/// assert!(adf.bipolar());
/// ```
pub struct Builder<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    arguments: HashMap<T, C>,
    links: HashMap<T, Vec<Link<T, L>>>,
    removed: HashSet<T>,
    resolution: LinkResolution<T, C, L>,
}

impl<T, C, L> Default for Builder<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    fn default() -> Self {
        Self {
            arguments: HashMap::new(),
            links: HashMap::new(),
            removed: HashSet::new(),
            resolution: LinkResolution::default(),
        }
    }
}

impl<T, C, L> Builder<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    /// Builds an empty builder, in provided mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument with its acceptance condition.
    ///
    /// If the argument was already added, its acceptance condition is replaced.
    pub fn add_argument(&mut self, argument: T, acceptance_condition: C) -> &mut Self {
        self.removed.remove(&argument);
        self.arguments.insert(argument, acceptance_condition);
        self
    }

    /// Adds an explicit link.
    ///
    /// Explicit links take precedence over the strategy.
    /// They are checked when the framework is built: their children must be arguments of this builder,
    /// and their parents must be dependencies of the acceptance conditions of their children.
    pub fn add_link(&mut self, link: Link<T, L>) -> &mut Self {
        self.links.entry(link.child().clone()).or_default().push(link);
        self
    }

    /// Removes an argument, returning its acceptance condition.
    ///
    /// The links involving this argument and the acceptance conditions depending on it are left untouched;
    /// building the framework fails as long as they refer to the removed argument.
    ///
    /// An error is returned if the argument is not defined.
    pub fn remove_argument(&mut self, argument: &T) -> Result<C> {
        match self.arguments.remove(argument) {
            Some(acc) => {
                self.removed.insert(argument.clone());
                Ok(acc)
            }
            None => Err(AdfError::NoSuchArgument(argument.to_string()).into()),
        }
    }

    /// Sets the lazy mode: missing links are computed by the strategy when they are first queried.
    pub fn lazy<S>(&mut self, strategy: S) -> &mut Self
    where
        S: LinkStrategy<T, C, L> + 'static,
    {
        self.resolution = LinkResolution::Lazy(Arc::new(strategy));
        self
    }

    /// Sets the eager mode: missing links are computed by the strategy when the framework is built.
    pub fn eager<S>(&mut self, strategy: S) -> &mut Self
    where
        S: LinkStrategy<T, C, L> + 'static,
    {
        self.resolution = LinkResolution::Eager(Arc::new(strategy));
        self
    }

    /// Sets the provided mode: all the links must be given explicitly.
    pub fn provided(&mut self) -> &mut Self {
        self.resolution = LinkResolution::Provided;
        self
    }

    /// Sets the resolution mode by its name.
    ///
    /// The strategy is ignored in provided mode, and required by the two other modes.
    pub fn with_mode(
        &mut self,
        mode: ResolutionMode,
        strategy: Option<Arc<dyn LinkStrategy<T, C, L>>>,
    ) -> Result<&mut Self> {
        self.resolution = match (mode, strategy) {
            (ResolutionMode::Provided, _) => LinkResolution::Provided,
            (ResolutionMode::Eager, Some(s)) => LinkResolution::Eager(s),
            (ResolutionMode::Lazy, Some(s)) => LinkResolution::Lazy(s),
            (m, None) => return Err(AdfError::MissingStrategy(m.to_string()).into()),
        };
        Ok(self)
    }

    /// Returns the current resolution policy.
    pub fn resolution(&self) -> &LinkResolution<T, C, L> {
        &self.resolution
    }

    /// Returns the number of arguments.
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of explicit links, including duplicates.
    pub fn link_count(&self) -> usize {
        self.links.values().map(|v| v.len()).sum()
    }

    /// Builds a framework made of the arguments and links of this builder.
    ///
    /// The builder is left untouched and may be used again, whether the build succeeds or not.
    /// An error is returned if an acceptance condition depends on an undefined argument,
    /// if an explicit link is inconsistent with the acceptance conditions,
    /// or if links are missing while no strategy is set.
    pub fn build(&self) -> Result<GraphFramework<T, C, L>>
    where
        C: Clone,
    {
        let index = self
            .build_index(None)
            .context("cannot build the framework")?;
        Ok(GraphFramework::new(index))
    }

    /// Builds a framework extending another one with the arguments and links of this builder.
    ///
    /// The extended framework is not copied.
    /// The acceptance conditions of the new arguments may depend on the arguments of the extended framework,
    /// but the arguments of the builder must not be defined by the extended framework.
    /// Explicit links must target the new arguments.
    pub fn build_extension(
        &self,
        base: SharedFramework<T, C, L>,
    ) -> Result<ExtendedFramework<T, C, L>>
    where
        C: Clone,
    {
        let base_ref: &dyn AbstractDialecticalFramework<T, C, L> = &*base;
        let index = self
            .build_index(Some(base_ref))
            .context("cannot build the extended framework")?;
        Ok(ExtendedFramework::new(base, index))
    }

    fn build_index(
        &self,
        base: Option<&dyn AbstractDialecticalFramework<T, C, L>>,
    ) -> Result<NodeIndex<T, C, L>>
    where
        C: Clone,
    {
        let lazy_strategy = match &self.resolution {
            LinkResolution::Lazy(s) => Some(Arc::clone(s)),
            _ => None,
        };
        let in_base = |argument: &T| base.map(|b| b.contains(argument)).unwrap_or(false);
        // arguments and links are visited in name order: the reported error does not depend on hashing
        let mut arguments = self.arguments.iter().collect::<Vec<_>>();
        arguments.sort_by_cached_key(|(argument, _)| argument.to_string());
        let mut index = NodeIndex::new(arguments.len(), lazy_strategy);
        let mut owned = Vec::with_capacity(arguments.len());
        for (argument, acc) in arguments {
            if in_base(argument) {
                return Err(AdfError::ArgumentAlreadyDefined(argument.to_string()).into());
            }
            owned.push((index.new_node(argument.clone(), acc.clone()), argument, acc));
        }
        let mut unknown_children = self
            .links
            .iter()
            .filter(|(child, _)| !self.arguments.contains_key(*child))
            .filter_map(|(_, links)| links.first())
            .collect::<Vec<_>>();
        unknown_children.sort_by_cached_key(|l| (l.child().to_string(), l.parent().to_string()));
        if let Some(link) = unknown_children.first() {
            return Err(AdfError::UnknownLinkChild {
                parent: link.parent().to_string(),
                child: link.child().to_string(),
            }
            .into());
        }
        let mut pending = Vec::new();
        let mut missing = Vec::new();
        for (child_id, child, acc) in owned {
            for (parent, link_type) in self.links_to(child, acc)? {
                let parent_id = match index.id_of(&parent) {
                    Some(id) => id,
                    None if in_base(&parent) => index.new_foreign_node(parent.clone()),
                    None => {
                        if self.removed.contains(&parent) {
                            warn!("{} has been removed, but {} still depends on it", parent, child);
                        }
                        return Err(AdfError::UndefinedDependency {
                            parent: parent.to_string(),
                            child: child.to_string(),
                        }
                        .into());
                    }
                };
                if link_type.is_none() && matches!(self.resolution, LinkResolution::Provided) {
                    missing.push(format!("{}->{}", parent, child));
                }
                pending.push((parent_id, parent, child_id, child, acc, link_type));
            }
        }
        if !missing.is_empty() {
            missing.sort_unstable();
            return Err(AdfError::MissingLinks {
                count: missing.len(),
                links: missing.join(", "),
            }
            .into());
        }
        // the input is valid: the eager strategy only sees defined arguments
        for (parent_id, parent, child_id, child, acc, link_type) in pending {
            let link_type = match (link_type, &self.resolution) {
                (None, LinkResolution::Eager(s)) => Some(s.compute(&parent, child, acc)),
                (t, _) => t,
            };
            index.new_slot(parent_id, child_id, link_type);
        }
        debug!(
            "built a framework with {} argument(s) and {} link(s) ({} mode, {} unresolved)",
            index.n_owned(),
            index.n_slots(),
            self.resolution.mode(),
            index.n_slots() - index.n_resolved(),
        );
        Ok(index)
    }

    // Computes the parents of a child, sorted by name, with the types of the explicit links.
    // The types of the other links are left unknown.
    fn links_to(&self, child: &T, acceptance_condition: &C) -> Result<Vec<(T, Option<L>)>> {
        let required = acceptance_condition.dependencies();
        let mut supplied: HashMap<&T, L> = HashMap::new();
        for link in self.links.get(child).into_iter().flatten() {
            if !required.contains(link.parent()) {
                return Err(AdfError::UnexpectedLink {
                    parent: link.parent().to_string(),
                    child: child.to_string(),
                }
                .into());
            }
            match supplied.entry(link.parent()) {
                Entry::Occupied(e) if *e.get() != link.link_type() => {
                    return Err(AdfError::ConflictingLinks {
                        parent: link.parent().to_string(),
                        child: child.to_string(),
                    }
                    .into())
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(e) => {
                    e.insert(link.link_type());
                }
            }
        }
        let mut parents = required
            .into_iter()
            .map(|parent| {
                let link_type = supplied.get(&parent).copied();
                (parent, link_type)
            })
            .collect::<Vec<_>>();
        parents.sort_by_cached_key(|(parent, _)| parent.to_string());
        Ok(parents)
    }
}
