pub mod element;
pub mod group;
pub mod property;

pub use element::Element;
pub use group::Group;
pub use property::Property;
