pub(crate) mod params_form;
pub(crate) mod preview;
