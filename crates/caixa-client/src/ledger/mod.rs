pub mod currency;
pub mod load;
pub mod model;
pub mod monthly;
pub mod summary;
pub mod table;
