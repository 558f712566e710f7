pub mod city;
pub mod error;
pub mod health;
pub mod middleware;
pub mod responses;
pub mod security;
pub mod tags;
