pub mod error;
pub mod health {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod rating {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;
pub mod widget {
    pub mod dto;
    pub mod renderer;
    pub mod routes;
}
