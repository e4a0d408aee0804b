pub(crate) mod extraction;
pub(crate) mod normalize;
pub(crate) mod pipeline;
pub(crate) mod render;
pub(crate) mod search;
