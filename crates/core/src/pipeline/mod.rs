pub mod score_pronunciation_use_case;
