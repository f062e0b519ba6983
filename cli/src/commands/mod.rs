pub mod deploy;
pub mod interact;
