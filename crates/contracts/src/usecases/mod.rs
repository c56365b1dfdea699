pub mod u501_simulated_chat;
pub mod u502_document_pipeline;
