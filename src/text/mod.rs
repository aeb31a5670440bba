pub(crate) mod fit;
pub(crate) mod font;
pub(crate) mod measure;
pub(crate) mod wrap;
