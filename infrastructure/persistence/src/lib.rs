pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod suggestion {
    pub mod entity;
    pub mod repository;
}
