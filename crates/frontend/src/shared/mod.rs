pub mod delay;
pub mod icons;
pub mod tasks;
