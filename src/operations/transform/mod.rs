mod scale_about_point;

pub use scale_about_point::ScaleAboutPoint;
