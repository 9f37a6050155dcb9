pub(crate) mod article;
