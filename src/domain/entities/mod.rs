pub mod edit;
pub mod resize;
pub mod table;
