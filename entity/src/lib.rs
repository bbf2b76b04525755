pub mod host;
pub mod panel;
pub mod profile;

pub mod prelude {
    pub use super::host::Entity as Host;
    pub use super::panel::Entity as Panel;
    pub use super::profile::Entity as Profile;
}
