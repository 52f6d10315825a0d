mod aggregator;
mod authorization;
mod collection;
mod completion;
mod identity;
#[cfg(test)]
mod mock_resource;
mod strategy;

pub use aggregator::*;
pub use authorization::*;
pub use collection::*;
pub use completion::*;
pub use identity::*;
pub use strategy::*;
