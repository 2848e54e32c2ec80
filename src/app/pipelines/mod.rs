pub mod form_pipeline;
