//! Tera rendering adapter

mod tera;

pub use self::tera::TeraRenderer;
