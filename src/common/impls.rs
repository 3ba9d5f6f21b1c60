pub mod custom_error;
