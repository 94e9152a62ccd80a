pub(crate) mod navigator;
pub(crate) mod route;

pub use navigator::Navigator;
pub use route::Route;
