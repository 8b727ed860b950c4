pub mod about;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod trip;

pub use about::AboutPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use trip::TripPage;
