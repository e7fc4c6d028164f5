pub mod summarize_service;
