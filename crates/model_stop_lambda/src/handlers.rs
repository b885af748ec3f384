pub mod stop_model;
