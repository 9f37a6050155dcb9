pub(crate) mod dismiss;
pub(crate) mod keyboard;
pub(crate) mod params_form;
pub(crate) mod preview;
pub(crate) mod window;
