pub mod json_phrase_store;
