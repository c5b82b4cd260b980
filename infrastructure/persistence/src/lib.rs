pub mod db;
pub mod ingredient {
    pub mod entity;
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
