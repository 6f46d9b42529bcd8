pub mod load;
pub mod scan;
