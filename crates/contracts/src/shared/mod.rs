pub mod error;
pub mod palette;
pub mod request_seq;
pub mod text;
