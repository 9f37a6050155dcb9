pub(crate) mod catalog;
pub(crate) mod selection;
pub(crate) mod ui;
