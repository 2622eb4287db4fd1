pub mod luov;

pub use luov::{Luov, Luov1, Luov3, Luov5};
