pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestContext, TestError};
}
