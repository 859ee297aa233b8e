//! Common test utilities for city-seeder

pub mod server;

pub use fixtures::CityFactory;
pub use server::MockPostgrest;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
