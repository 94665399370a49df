pub mod catalog {
    pub mod json_file;
    pub mod sample;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
