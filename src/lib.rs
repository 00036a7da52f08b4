pub mod config;
pub mod controllers;
pub mod discover;
pub mod error;
pub mod generator;
pub mod models;
pub mod repository;
pub mod spoonacular;
