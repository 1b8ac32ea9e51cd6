pub(crate) mod by_name;
pub(crate) mod get;
pub(crate) mod index;
