pub mod model_service;
pub mod rekognition;
