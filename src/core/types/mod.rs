//! Core type definition module

pub mod city;

pub use city::{CityRecord, Subdivision};
