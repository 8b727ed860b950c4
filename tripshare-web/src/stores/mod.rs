//! Domain data stores. Each one owns a single cached backend resource.

pub mod categories;
pub mod currencies;
pub mod resource;
pub mod trip;

pub use categories::ExpenseCategoriesStore;
pub use currencies::CurrenciesStore;
pub use resource::ResourceState;
pub use trip::TripStore;
