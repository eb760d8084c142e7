//! Links between arguments, their types, and the strategies computing them.

mod adf_link;
pub use adf_link::Link;

mod link_strategy;
pub use link_strategy::ConstantLinkStrategy;
pub use link_strategy::LinkStrategy;

mod link_type;
pub use link_type::LinkKind;
pub use link_type::LinkType;
