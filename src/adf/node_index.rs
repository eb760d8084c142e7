use super::AcceptanceCondition;
use crate::{
    link::{Link, LinkStrategy, LinkType},
    utils::{LabelIndex, LabelType},
};
use log::{debug, trace};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, OnceLock,
    },
};

const K_NOT_COMPUTED: usize = usize::MAX;

/// The resolution state of a link.
///
/// Links of lazy frameworks are computed the first time they are queried.
/// Before that, they are unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState<L>
where
    L: LinkType,
{
    /// The type of the link has not been computed yet.
    Unresolved,
    /// The type of the link is known.
    Resolved(L),
}

// A link slot is shared by the parent and child nodes, so both directions always agree on the type.
// The type is set at most once; concurrent resolutions may compute it twice, but only one value is published.
struct LinkSlot<L>
where
    L: LinkType,
{
    parent: usize,
    child: usize,
    link_type: OnceLock<L>,
}

struct Node<C> {
    // foreign nodes (arguments of an extended framework) have no acceptance condition
    acceptance_condition: Option<C>,
    parents: HashMap<usize, usize>,
    children: HashMap<usize, usize>,
}

/// Which adjacency map of a node is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Incoming,
    Outgoing,
}

/// The index of the nodes of a framework.
///
/// Arguments are given dense ids; nodes and link slots are stored in tables addressed by these ids.
/// Owned nodes come first; foreign nodes, which only stand for parents defined in another framework, follow.
pub(crate) struct NodeIndex<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    labels: LabelIndex<T>,
    nodes: Vec<Node<C>>,
    n_owned: usize,
    slots: Vec<LinkSlot<L>>,
    strategy: Option<Arc<dyn LinkStrategy<T, C, L>>>,
    k_bipolar: AtomicUsize,
}

impl<T, C, L> NodeIndex<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    /// Builds an empty index.
    ///
    /// The strategy is used to resolve the slots that are created without a link type.
    pub(crate) fn new(capacity: usize, strategy: Option<Arc<dyn LinkStrategy<T, C, L>>>) -> Self {
        Self {
            labels: LabelIndex::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            n_owned: 0,
            slots: Vec::new(),
            strategy,
            k_bipolar: AtomicUsize::new(K_NOT_COMPUTED),
        }
    }

    /// Adds an owned node.
    ///
    /// # Panics
    ///
    /// Panics if a foreign node has already been added, or if the argument is already indexed.
    pub(crate) fn new_node(&mut self, argument: T, acceptance_condition: C) -> usize {
        assert_eq!(
            self.n_owned,
            self.nodes.len(),
            "owned nodes must be added before foreign ones"
        );
        let id = self.new_entry(argument, Some(acceptance_condition));
        self.n_owned += 1;
        id
    }

    /// Adds a foreign node.
    ///
    /// # Panics
    ///
    /// Panics if the argument is already indexed.
    pub(crate) fn new_foreign_node(&mut self, argument: T) -> usize {
        self.new_entry(argument, None)
    }

    fn new_entry(&mut self, argument: T, acceptance_condition: Option<C>) -> usize {
        let id = self.labels.insert(argument);
        assert_eq!(id, self.nodes.len(), "argument indexed twice");
        self.nodes.push(Node {
            acceptance_condition,
            parents: HashMap::new(),
            children: HashMap::new(),
        });
        id
    }

    /// Adds a link slot between two nodes; the child must be an owned node.
    ///
    /// If no type is given, the slot is unresolved and the strategy will be called the first time it is read.
    pub(crate) fn new_slot(&mut self, parent: usize, child: usize, link_type: Option<L>) {
        debug_assert!(child < self.n_owned);
        let link_type = match link_type {
            Some(t) => OnceLock::from(t),
            None => OnceLock::new(),
        };
        let slot_id = self.slots.len();
        self.slots.push(LinkSlot {
            parent,
            child,
            link_type,
        });
        self.nodes[child].parents.insert(parent, slot_id);
        self.nodes[parent].children.insert(child, slot_id);
    }

    /// Returns the id of an argument, owned or foreign.
    pub(crate) fn id_of(&self, argument: &T) -> Option<usize> {
        self.labels.id_of(argument)
    }

    /// Returns the id of an owned argument.
    pub(crate) fn owned_id(&self, argument: &T) -> Option<usize> {
        self.labels.id_of(argument).filter(|id| *id < self.n_owned)
    }

    pub(crate) fn label(&self, id: usize) -> &T {
        self.labels.label(id)
    }

    pub(crate) fn n_owned(&self) -> usize {
        self.n_owned
    }

    pub(crate) fn n_slots(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over the owned arguments.
    pub(crate) fn iter_owned(&self) -> impl Iterator<Item = &T> + '_ {
        self.labels.iter().take(self.n_owned)
    }

    /// Returns the acceptance condition of a node, or `None` for foreign nodes.
    pub(crate) fn acceptance_condition(&self, id: usize) -> Option<&C> {
        self.nodes[id].acceptance_condition.as_ref()
    }

    /// Returns the adjacency map of a node, from the ids of the neighbors to the slot ids.
    pub(crate) fn adjacency(&self, id: usize, direction: Direction) -> &HashMap<usize, usize> {
        match direction {
            Direction::Incoming => &self.nodes[id].parents,
            Direction::Outgoing => &self.nodes[id].children,
        }
    }

    /// Returns the slot of the link from `parent` to `child`, if any.
    pub(crate) fn slot_between(&self, parent: usize, child: usize) -> Option<usize> {
        self.nodes[child].parents.get(&parent).copied()
    }

    /// Returns the state of a slot, without resolving it.
    pub(crate) fn state(&self, slot_id: usize) -> LinkState<L> {
        match self.slots[slot_id].link_type.get() {
            Some(t) => LinkState::Resolved(*t),
            None => LinkState::Unresolved,
        }
    }

    /// Returns the type of a slot, calling the strategy if it is unresolved.
    ///
    /// No lock is held while the strategy runs.
    /// If several threads resolve the same slot, the first published value is returned to all of them.
    pub(crate) fn resolve(&self, slot_id: usize) -> L {
        let slot = &self.slots[slot_id];
        if let Some(t) = slot.link_type.get() {
            return *t;
        }
        let strategy = match &self.strategy {
            Some(s) => s,
            None => unreachable!("unresolved links only exist when a strategy is set"),
        };
        let parent = self.labels.label(slot.parent);
        let child = self.labels.label(slot.child);
        let acceptance_condition = match &self.nodes[slot.child].acceptance_condition {
            Some(acc) => acc,
            None => unreachable!("links always target owned nodes"),
        };
        let computed = strategy.compute(parent, child, acceptance_condition);
        trace!("computed the type of the link from {} to {}", parent, child);
        let _ = slot.link_type.set(computed);
        slot.link_type.get().copied().unwrap_or(computed)
    }

    /// Returns the (resolved) link stored in a slot.
    pub(crate) fn link(&self, slot_id: usize) -> Link<T, L> {
        let link_type = self.resolve(slot_id);
        let slot = &self.slots[slot_id];
        Link::new(
            self.labels.label(slot.parent).clone(),
            self.labels.label(slot.child).clone(),
            link_type,
        )
    }

    /// Iterates over all the links, resolving them.
    pub(crate) fn iter_links(&self) -> impl Iterator<Item = Link<T, L>> + '_ {
        (0..self.slots.len()).map(|i| self.link(i))
    }

    /// Returns the number of resolved slots.
    pub(crate) fn n_resolved(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.link_type.get().is_some())
            .count()
    }

    /// Returns the number of non-bipolar links.
    ///
    /// The first call resolves all the links; the result is then cached.
    pub(crate) fn k_bipolar(&self) -> usize {
        let cached = self.k_bipolar.load(Ordering::Acquire);
        if cached != K_NOT_COMPUTED {
            return cached;
        }
        let k = (0..self.slots.len())
            .filter(|i| self.resolve(*i).is_non_bipolar())
            .count();
        self.k_bipolar.store(k, Ordering::Release);
        debug!("found {} non-bipolar link(s) among {}", k, self.slots.len());
        k
    }
}
