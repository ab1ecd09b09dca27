pub mod mock_config;
pub mod task_builder;
