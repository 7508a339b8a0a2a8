pub mod json_hint_loader;
