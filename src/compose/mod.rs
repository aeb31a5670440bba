pub(crate) mod blend;
pub(crate) mod gradient;
pub(crate) mod layers;
pub(crate) mod mask;
pub(crate) mod overlay;
pub(crate) mod panel;
