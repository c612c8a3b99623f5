pub mod storage;
pub mod table;
