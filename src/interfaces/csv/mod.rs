pub mod user_reader;
