pub(crate) mod callback_href;
