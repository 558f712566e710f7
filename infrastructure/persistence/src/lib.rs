pub mod db;
pub mod city {
    pub mod entity;
    pub mod repository;
}
pub mod health {
    pub mod probe;
}
