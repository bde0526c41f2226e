pub(crate) mod node;
pub(crate) mod style_node;
