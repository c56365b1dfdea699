pub mod a001_chat_message;
pub mod a002_uploaded_file;
pub mod a003_analysis_result;
