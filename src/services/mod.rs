pub mod test_generation_service;
